//! Niching GA configuration.
//!
//! [`NicheConfig`] holds all parameters that control the niching loop.

use crate::ga::Bounds;
use crate::GaError;

/// Configuration for the niching GA.
///
/// # Defaults
///
/// The defaults reproduce the reference experiment on the cosine
/// landscape over `[-0.5, 1.500001]²`.
///
/// ```
/// use nichega::niching::NicheConfig;
///
/// let config = NicheConfig::default();
/// assert_eq!(config.population_size, 150);
/// assert_eq!(config.max_iter, 1000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use nichega::niching::NicheConfig;
///
/// let config = NicheConfig::default()
///     .with_population_size(80)
///     .with_radius(0.3)
///     .with_select_times(3)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NicheConfig {
    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Number of generations to run.
    pub max_iter: usize,

    /// Probability that each of the `population_size` crossover trials fires.
    pub p_crossover: f64,

    /// Per-gene probability of uniform resampling.
    pub p_mutation: f64,

    /// Niche radius: cells closer than this share fitness.
    pub radius: f64,

    /// Shape exponent of the sharing function `1 - (d / radius)^alpha`.
    pub alpha: f64,

    /// Sampling interval of the first gene.
    pub x_bounds: Bounds,

    /// Sampling interval of the second gene.
    pub y_bounds: Bounds,

    /// Extra candidates drawn per tournament (0 = uniform selection).
    pub select_times: usize,

    /// Maximum number of peaks reported by peak extraction.
    pub peak_cap: usize,

    /// Minimum distance between two reported peaks.
    pub peak_separation: f64,

    /// Stride between rows of the per-generation report.
    pub report_interval: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for NicheConfig {
    fn default() -> Self {
        let bounds = Bounds::new(-0.5, 1.500001);
        Self {
            population_size: 150,
            max_iter: 1000,
            p_crossover: 0.25,
            p_mutation: 0.01,
            radius: 0.25,
            alpha: 1.0,
            x_bounds: bounds,
            y_bounds: bounds,
            select_times: 5,
            peak_cap: 4,
            peak_separation: 1.0,
            report_interval: 100,
            seed: None,
        }
    }
}

impl NicheConfig {
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

    /// Sets the niche radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the sharing exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Uses the same sampling interval for both genes.
    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.x_bounds = Bounds::new(lower, upper);
        self.y_bounds = Bounds::new(lower, upper);
        self
    }

    /// Sets the tournament size.
    pub fn with_select_times(mut self, n: usize) -> Self {
        self.select_times = n;
        self
    }

    /// Sets the report stride.
    pub fn with_report_interval(mut self, n: usize) -> Self {
        self.report_interval = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
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
        if !(self.radius > 0.0 && self.radius.is_finite()) {
            return Err(GaError::invalid("radius must be positive and finite"));
        }
        if !self.alpha.is_finite() {
            return Err(GaError::invalid("alpha must be finite"));
        }
        if self.report_interval == 0 {
            return Err(GaError::invalid("report_interval must be at least 1"));
        }
        self.x_bounds.validate("x")?;
        self.y_bounds.validate("y")?;
        Ok(())
    }
}
