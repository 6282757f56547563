//! Individual and domain types shared by both optimizers.

use crate::GaError;
use rand::Rng;

/// One candidate solution: two real genes and a fitness score.
///
/// `Cell` is `Copy`, so inserting it into a new generation always copies
/// the value. No two population slots ever share storage, which keeps
/// in-place crossover and mutation from leaking between slots that were
/// selected from the same parent.
///
/// Higher fitness is better in both optimizers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// First gene (`x` for the niching GA, radius `r` for the cone GA).
    pub x: f64,
    /// Second gene (`y` for the niching GA, height `h` for the cone GA).
    pub y: f64,
    /// Fitness from the most recent evaluation.
    pub fitness: f64,
}

impl Cell {
    /// Fitness carried by the "no best yet" sentinel.
    pub const SENTINEL_FITNESS: f64 = f64::NEG_INFINITY;

    /// Creates an unevaluated cell (fitness 0).
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, fitness: 0.0 }
    }

    /// Creates a cell with a known fitness.
    pub fn with_fitness(x: f64, y: f64, fitness: f64) -> Self {
        Self { x, y, fitness }
    }

    /// The sentinel used before any best has been recorded.
    pub fn sentinel() -> Self {
        Self::with_fitness(0.0, 0.0, Self::SENTINEL_FITNESS)
    }

    /// Returns `true` if this is the sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.fitness == Self::SENTINEL_FITNESS
    }

    /// Euclidean distance between the gene pairs of two cells.
    pub fn distance(&self, other: &Cell) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A generation: fixed size, duplicates allowed, order only matters for
/// crossover pairing.
pub type Population = Vec<Cell>;

/// Closed sampling interval `[lower, upper]` for one gene.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Draws a uniform value from `[lower, upper]`.
    ///
    /// # Panics
    /// Panics if the bounds are not finite or `lower > upper`; configs
    /// reject such bounds in `validate`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.random_range(self.lower..=self.upper)
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    pub(crate) fn validate(&self, name: &str) -> Result<(), GaError> {
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err(GaError::invalid(format!("{name} bounds must be finite")));
        }
        if self.lower > self.upper {
            return Err(GaError::invalid(format!(
                "{name} bounds are inverted: {} > {}",
                self.lower, self.upper
            )));
        }
        Ok(())
    }
}
