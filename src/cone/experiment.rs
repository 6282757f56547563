//! Repeated independent cone runs and their averaged outcome.

use super::config::ConeConfig;
use super::objective::volume;
use super::runner::ConeGa;
use crate::random::rng_from_seed;
use crate::GaError;
use std::fmt;

/// Runs the cone GA `runs` times with seeds `base_seed, base_seed + 1, ...`.
#[derive(Debug, Clone)]
pub struct ConeExperiment {
    pub config: ConeConfig,
    pub runs: usize,
    pub base_seed: Option<u64>,
}

/// Means over the best cell of every run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentSummary {
    pub runs: usize,
    /// Mean best area, as a positive value.
    pub mean_area: f64,
    pub mean_volume: f64,
    pub mean_r: f64,
    pub mean_h: f64,
}

impl ConeExperiment {
    pub fn new(config: ConeConfig, runs: usize) -> Self {
        Self {
            config,
            runs,
            base_seed: None,
        }
    }

    pub fn with_base_seed(mut self, seed: u64) -> Self {
        self.base_seed = Some(seed);
        self
    }

    /// Runs every repetition; any failed run aborts the experiment.
    pub fn run(&self) -> Result<ExperimentSummary, GaError> {
        if self.runs == 0 {
            return Err(GaError::invalid("experiment needs at least one run"));
        }
        let ga = ConeGa::new(self.config.clone())?;
        let base = self.base_seed.unwrap_or_else(rand::random);

        let (mut area, mut vol, mut r, mut h) = (0.0, 0.0, 0.0, 0.0);
        for run in 0..self.runs {
            let mut rng = rng_from_seed(Some(base.wrapping_add(run as u64)));
            let result = ga.run_with_rng(&mut rng)?;
            log::debug!(
                "experiment run {run}: area {:.4}, volume {:.4}",
                -result.best.fitness,
                result.best_volume()
            );
            area += -result.best.fitness;
            vol += volume(result.best.x, result.best.y);
            r += result.best.x;
            h += result.best.y;
        }

        let n = self.runs as f64;
        Ok(ExperimentSummary {
            runs: self.runs,
            mean_area: area / n,
            mean_volume: vol / n,
            mean_r: r / n,
            mean_h: h / n,
        })
    }
}

impl fmt::Display for ExperimentSummary {
    /// Markdown table of the means.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "|name|stats|")?;
        writeln!(f, "|-|-|")?;
        writeln!(f, "|Total area mean|{}|", self.mean_area)?;
        writeln!(f, "|Volume mean|{}|", self.mean_volume)?;
        writeln!(f, "|r mean|{}|", self.mean_r)?;
        writeln!(f, "|h mean|{}|", self.mean_h)
    }
}
