//! Distinct-peak extraction from the best-per-generation history.

use super::fitness::with_raw_fitness;
use crate::ga::Cell;

/// Greedy non-maximum suppression over the best-per-generation history.
///
/// The history is ranked by fitness (best first) and only the top `k`
/// entries are considered. A candidate is accepted if it lies at least
/// `min_separation` from every peak accepted so far; extraction stops
/// once `cap` peaks are held. Returned peaks carry their unshared
/// fitness.
pub fn find_peaks(history: &[Cell], k: usize, cap: usize, min_separation: f64) -> Vec<Cell> {
    let mut ranked = history.to_vec();
    ranked.sort_by(|a, b| {
        b.fitness
            .partial_cmp(&a.fitness)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut peaks: Vec<Cell> = Vec::with_capacity(cap);
    for candidate in ranked.iter().take(k) {
        if peaks.len() >= cap {
            break;
        }
        if peaks
            .iter()
            .all(|peak| peak.distance(candidate) >= min_separation)
        {
            peaks.push(with_raw_fitness(candidate));
        }
    }
    peaks
}
