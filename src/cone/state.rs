//! Stagnation-driven objective switching.

use super::objective::Objective;

/// Current objective plus the worsening counter that drives rotation.
///
/// Each generation's best fitness is compared with the previous
/// generation's. A drop increments the counter; an improvement or tie
/// leaves it alone (it does not reset). When the counter exceeds
/// `stagnation_limit` it resets to zero and the objective advances via
/// [`Objective::next`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectiveState {
    objective: Objective,
    worse_count: usize,
    stagnation_limit: usize,
    previous_best: Option<f64>,
}

impl ObjectiveState {
    /// Starts on [`Objective::TotalArea`].
    pub fn new(stagnation_limit: usize) -> Self {
        Self {
            objective: Objective::TotalArea,
            worse_count: 0,
            stagnation_limit,
            previous_best: None,
        }
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }

    pub fn worse_count(&self) -> usize {
        self.worse_count
    }

    /// Feeds one generation's best fitness.
    ///
    /// Returns the new objective if this observation triggered a switch.
    /// The first observation only establishes the baseline.
    pub fn observe(&mut self, generation_best: f64) -> Option<Objective> {
        let previous = self.previous_best.replace(generation_best);
        let worse = matches!(previous, Some(prev) if prev > generation_best);
        if !worse {
            return None;
        }

        self.worse_count += 1;
        if self.worse_count <= self.stagnation_limit {
            return None;
        }
        self.worse_count = 0;
        self.objective = self.objective.next();
        Some(self.objective)
    }
}
