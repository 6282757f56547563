//! Cone GA configuration.

use super::objective::volume;
use super::repair::VolumeRepair;
use crate::ga::Bounds;
use crate::GaError;

/// Configuration for the cone GA.
///
/// # Defaults
///
/// ```
/// use nichega::cone::ConeConfig;
///
/// let config = ConeConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.min_volume, 200.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConeConfig {
    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Number of generations to run.
    pub max_iter: usize,

    /// Probability that each of the `population_size` crossover trials fires.
    pub p_crossover: f64,

    /// Per-gene probability of uniform resampling.
    pub p_mutation: f64,

    /// Sampling interval of the radius gene.
    pub r_bounds: Bounds,

    /// Sampling interval of the height gene.
    pub h_bounds: Bounds,

    /// Feasible cones satisfy `volume > min_volume`.
    pub min_volume: f64,

    /// Offset added to the best-ever cell when repair snaps to it.
    pub repair_epsilon: f64,

    /// Resamples allowed per repair before the run fails.
    pub max_repair_attempts: usize,

    /// Worsening generations tolerated before the objective switches.
    pub stagnation_limit: usize,

    /// Stride between rows of the per-generation report.
    pub report_interval: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for ConeConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_iter: 5000,
            p_crossover: 0.25,
            p_mutation: 0.01,
            r_bounds: Bounds::new(0.0, 10.0),
            h_bounds: Bounds::new(0.0, 20.0),
            min_volume: 200.0,
            repair_epsilon: 1e-4,
            max_repair_attempts: 10_000,
            stagnation_limit: 10,
            report_interval: 200,
            seed: None,
        }
    }
}

impl ConeConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_iter(mut self, n: usize) -> Self {
        self.max_iter = n;
        self
    }

    /// Sets the crossover probability.
    pub fn with_p_crossover(mut self, p: f64) -> Self {
        self.p_crossover = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation probability.
    pub fn with_p_mutation(mut self, p: f64) -> Self {
        self.p_mutation = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the radius and height sampling intervals.
    pub fn with_bounds(mut self, r_bounds: Bounds, h_bounds: Bounds) -> Self {
        self.r_bounds = r_bounds;
        self.h_bounds = h_bounds;
        self
    }

    /// Sets the volume threshold.
    pub fn with_min_volume(mut self, v: f64) -> Self {
        self.min_volume = v;
        self
    }

    /// Sets the repair retry budget.
    pub fn with_max_repair_attempts(mut self, n: usize) -> Self {
        self.max_repair_attempts = n;
        self
    }

    /// Sets how many worsening generations trigger an objective switch.
    pub fn with_stagnation_limit(mut self, n: usize) -> Self {
        self.stagnation_limit = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The repairer described by this configuration.
    pub fn repair(&self) -> VolumeRepair {
        VolumeRepair {
            r_bounds: self.r_bounds,
            h_bounds: self.h_bounds,
            min_volume: self.min_volume,
            epsilon: self.repair_epsilon,
            max_attempts: self.max_repair_attempts,
        }
    }

    /// Largest volume reachable inside the bounds.
    fn max_volume(&self) -> f64 {
        let r2 = (self.r_bounds.lower * self.r_bounds.lower)
            .max(self.r_bounds.upper * self.r_bounds.upper);
        volume(r2.sqrt(), self.h_bounds.upper)
    }

    /// Validates the configuration.
    ///
    /// Besides range checks, rejects bounds under which no cone can
    /// exceed `min_volume`.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size < 2 {
            return Err(GaError::invalid("population_size must be at least 2"));
        }
        if self.max_iter == 0 {
            return Err(GaError::invalid("max_iter must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.p_crossover) {
            return Err(GaError::invalid("p_crossover must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.p_mutation) {
            return Err(GaError::invalid("p_mutation must be in [0, 1]"));
        }
        if !self.min_volume.is_finite() {
            return Err(GaError::invalid("min_volume must be finite"));
        }
        if !(self.repair_epsilon >= 0.0 && self.repair_epsilon.is_finite()) {
            return Err(GaError::invalid("repair_epsilon must be non-negative"));
        }
        if self.max_repair_attempts == 0 {
            return Err(GaError::invalid("max_repair_attempts must be at least 1"));
        }
        if self.report_interval == 0 {
            return Err(GaError::invalid("report_interval must be at least 1"));
        }
        self.r_bounds.validate("r")?;
        self.h_bounds.validate("h")?;
        let reachable = self.max_volume();
        if reachable <= self.min_volume {
            return Err(GaError::invalid(format!(
                "bounds reach at most volume {reachable:.4}, not above {}",
                self.min_volume
            )));
        }
        Ok(())
    }
}
