//! Two-gene real-valued genetic algorithms.
//!
//! Two optimizers share one evolutionary core (see [`ga`]):
//!
//! - **Niching GA** ([`niching`]): tournament selection plus fitness
//!   sharing, so a multimodal landscape keeps several peaks populated at
//!   once instead of collapsing onto a single optimum.
//! - **Cone GA** ([`cone`]): roulette selection over a rotating set of
//!   surface-area objectives for a cone, with a hard volume constraint
//!   enforced by repair and an objective switch driven by stagnation.
//!
//! Every generation runs select → crossover → mutate → (repair) →
//! evaluate → track, strictly in that order and single-threaded.
//!
//! # Architecture
//!
//! Run state that survives between generations (best-ever cell, the
//! per-generation best history, the objective state machine) lives in an
//! explicit state struct handed to each `step`, so a generation is a
//! function of `(population, state)`. Reporting and plotting consume
//! the finished results; nothing performs I/O inside the loop.

pub mod cone;
mod error;
pub mod ga;
pub mod niching;
pub mod random;
pub mod report;

pub use error::GaError;
