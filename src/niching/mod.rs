//! Niching GA with fitness sharing.
//!
//! Searches the cosine landscape [`fitness_func`] while keeping several
//! of its near-equal maxima populated at once. Each cell's raw fitness
//! is divided by its niche count, the summed sharing load of all cells
//! within `radius`, so crowded regions lose selection pressure relative
//! to sparsely held ones.
//!
//! # Key Types
//!
//! - [`NicheConfig`]: run parameters
//! - [`NicheGa`]: executes the loop; [`NicheGa::step`] runs one generation
//! - [`NicheResult`]: best cell, history, [`peaks`](NicheResult::peaks)
//!
//! # References
//!
//! - Goldberg & Richardson (1987), "Genetic Algorithms with Sharing for
//!   Multimodal Function Optimization"

mod config;
mod fitness;
mod peaks;
mod runner;

pub use config::NicheConfig;
pub use fitness::{evaluate, fitness_func, niche_count, EvalMode};
pub use peaks::find_peaks;
pub use runner::{NicheGa, NicheResult, NicheState};
