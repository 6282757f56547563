//! Volume-constrained cone design with objective switching.
//!
//! Minimizes a cone's area (radius `r` = first gene, height `h` = second)
//! subject to `volume(r, h) > 200`. Fitness is the negated area under one
//! of three [`Objective`]s; the active objective rotates whenever the
//! generation best keeps getting worse (see [`ObjectiveState`]).
//!
//! # Key Types
//!
//! - [`ConeConfig`]: run parameters
//! - [`ConeGa`]: executes the loop; [`ConeGa::step`] runs one generation
//! - [`VolumeRepair`]: restores feasibility after every operator
//! - [`ConeExperiment`]: averaged results over repeated runs

mod config;
mod experiment;
mod objective;
mod repair;
mod runner;
mod state;

pub use config::ConeConfig;
pub use experiment::{ConeExperiment, ExperimentSummary};
pub use objective::{base_area, surface_area, total_area, volume, Objective};
pub use repair::VolumeRepair;
pub use runner::{ConeGa, ConeResult, ConeState};
pub use state::ObjectiveState;
