//! Parent selection.
//!
//! Both schemes build a full replacement population of the same size.
//! Chosen cells are copied out of the source population, so repeated
//! picks of one parent become independent individuals.
//!
//! Unlike a minimizing GA, higher fitness is better here.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Cell;
use rand::Rng;

/// Offset added to shifted roulette weights so the worst cell keeps a
/// non-zero share.
const ROULETTE_EPSILON: f64 = 1e-10;

/// Tournament selection for one slot.
///
/// Samples an incumbent uniformly, then draws `select_times` more
/// candidates, replacing the incumbent only on strictly higher fitness
/// (ties keep the incumbent). With `select_times = 0` this is a uniform
/// pick.
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament_index<R: Rng>(population: &[Cell], select_times: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 0..select_times {
        let idx = rng.random_range(0..n);
        if population[best_idx].fitness < population[idx].fitness {
            best_idx = idx;
        }
    }
    best_idx
}

/// Fills a new population of equal size by tournament selection.
pub fn tournament<R: Rng>(population: &[Cell], select_times: usize, rng: &mut R) -> Vec<Cell> {
    (0..population.len())
        .map(|_| population[tournament_index(population, select_times, rng)])
        .collect()
}

/// Fitness-proportionate (roulette wheel) selection.
///
/// The population is ranked best-first so the linear scan walks the
/// largest slices first; the ranking does not change any probability.
/// For each slot `u ~ U[0, total)` is drawn and the first cell whose
/// running weight exceeds `u` is copied.
///
/// Weights are the raw fitness values when every fitness is positive.
/// Otherwise (the cone GA's negated areas are always negative) they are
/// shifted to `fitness - min + 1e-10`, so the best cell still gets the
/// largest slice. If the total weight is not a positive finite number,
/// every slot is filled uniformly at random.
pub fn roulette<R: Rng>(population: &[Cell], rng: &mut R) -> Vec<Cell> {
    let n = population.len();
    if n == 0 {
        return Vec::new();
    }

    let mut ranked = population.to_vec();
    ranked.sort_by(|a, b| {
        b.fitness
            .partial_cmp(&a.fitness)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let weights = roulette_weights(&ranked);
    let total: f64 = weights.iter().sum();
    if !(total > 0.0 && total.is_finite()) {
        log::debug!("roulette total weight {total} is degenerate, selecting uniformly");
        return (0..n).map(|_| ranked[rng.random_range(0..n)]).collect();
    }

    (0..n)
        .map(|_| {
            let threshold = rng.random_range(0.0..total);
            let mut cumulative = 0.0;
            for (cell, &w) in ranked.iter().zip(&weights) {
                cumulative += w;
                if cumulative > threshold {
                    return *cell;
                }
            }
            ranked[n - 1] // floating-point fallback
        })
        .collect()
}

/// Computes roulette weights for a best-first ranked population.
fn roulette_weights(ranked: &[Cell]) -> Vec<f64> {
    let min_fitness = ranked
        .iter()
        .map(|c| c.fitness)
        .fold(f64::INFINITY, f64::min);

    if min_fitness > 0.0 {
        return ranked.iter().map(|c| c.fitness).collect();
    }

    log::debug!("roulette shifting weights by minimum fitness {min_fitness}");
    ranked
        .iter()
        .map(|c| c.fitness - min_fitness + ROULETTE_EPSILON)
        .collect()
}
