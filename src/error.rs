//! Error type shared by both optimizers.

/// Errors raised while configuring or running an optimizer.
///
/// Every variant is fatal for the run that produced it: an optimizer
/// either completes `max_iter` generations or stops with one of these.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GaError {
    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Volume repair ran out of resampling attempts without finding a
    /// feasible point.
    #[error("no feasible point with volume > {min_volume} after {attempts} resampling attempts")]
    ConstraintInfeasible {
        /// Number of resamples drawn before giving up.
        attempts: usize,
        /// The volume threshold that could not be met.
        min_volume: f64,
    },
}

impl GaError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        GaError::InvalidConfig(msg.into())
    }
}
