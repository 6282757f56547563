//! Two-gene crossover and mutation operators.
//!
//! # Crossover
//!
//! The exchange is deliberately asymmetric: the first parent takes the
//! second parent's `x`, the second parent takes the first parent's `y`,
//! and the other two genes stay put. It is a one-directional transfer of
//! one gene from each side, not a full swap. Do not "correct" it into a
//! symmetric swap; both optimizers depend on this exact recombination.
//!
//! # Mutation
//!
//! Each gene gets its own Bernoulli trial, so one cell can have zero, one
//! or both genes resampled in a single pass.
//!
//! Operators run in place on the population produced by selection and
//! never change its length.

use super::types::{Bounds, Cell};
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Decides one crossover trial and draws its parent indices.
///
/// Returns `None` when the trial does not fire (probability
/// `1 - rate`), otherwise two distinct indices drawn uniformly from
/// `0..n`. A population of fewer than two cells never crosses over.
pub fn crossover_pair<R: Rng>(n: usize, rate: f64, rng: &mut R) -> Option<(usize, usize)> {
    if rng.random::<f64>() >= rate || n < 2 {
        return None;
    }
    let idx1 = rng.random_range(0..n);
    let mut idx2 = rng.random_range(0..n);
    while idx2 == idx1 {
        idx2 = rng.random_range(0..n);
    }
    Some((idx1, idx2))
}

/// Applies the asymmetric gene exchange to `population[idx1]` and
/// `population[idx2]`.
///
/// # Panics
/// Panics if either index is out of range.
pub fn exchange_genes(population: &mut [Cell], idx1: usize, idx2: usize) {
    population[idx1].x = population[idx2].x;
    population[idx2].y = population[idx1].y;
}

/// Runs `population.len()` crossover trials, each firing with
/// probability `rate`.
pub fn crossover<R: Rng>(population: &mut [Cell], rate: f64, rng: &mut R) {
    let n = population.len();
    for _ in 0..n {
        if let Some((idx1, idx2)) = crossover_pair(n, rate, rng) {
            exchange_genes(population, idx1, idx2);
        }
    }
}

// ============================================================================
// Mutation
// ============================================================================

/// Resamples each gene of `cell` independently with probability `rate`.
///
/// Returns `true` if at least one gene changed.
pub fn mutate_cell<R: Rng>(
    cell: &mut Cell,
    rate: f64,
    x_bounds: Bounds,
    y_bounds: Bounds,
    rng: &mut R,
) -> bool {
    let mut mutated = false;
    if rng.random::<f64>() < rate {
        cell.x = x_bounds.sample(rng);
        mutated = true;
    }
    if rng.random::<f64>() < rate {
        cell.y = y_bounds.sample(rng);
        mutated = true;
    }
    mutated
}

/// Applies [`mutate_cell`] to every cell.
pub fn mutate<R: Rng>(
    population: &mut [Cell],
    rate: f64,
    x_bounds: Bounds,
    y_bounds: Bounds,
    rng: &mut R,
) {
    for cell in population.iter_mut() {
        mutate_cell(cell, rate, x_bounds, y_bounds, rng);
    }
}
