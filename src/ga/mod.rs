//! Shared evolutionary core.
//!
//! Both optimizers are built from the same pieces:
//!
//! - [`Cell`] / [`Population`]: two real genes plus a fitness, copied by value
//! - [`Bounds`]: closed per-gene sampling interval
//! - [`selection`]: tournament and roulette selection
//! - [`operators`]: asymmetric gene-exchange crossover and per-gene mutation
//! - [`BestTracker`]: best-ever cell and per-generation history
//!
//! Higher fitness is always better.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

pub mod operators;
pub mod selection;
mod tracker;
mod types;

pub use tracker::{find_best, BestTracker};
pub use types::{Bounds, Cell, Population};
