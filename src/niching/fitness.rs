//! The multimodal landscape and niche-sharing evaluation.

use crate::ga::Cell;
use std::f64::consts::PI;

/// The cosine landscape `80 - x² - y² + 10·cos(2πx) + 10·cos(2πy)`.
///
/// Several near-equal maxima sit on the integer lattice around the
/// origin; `(0, 0)` scores exactly 100. A pure function so plotting code
/// can sample it independently of any run.
pub fn fitness_func(x: f64, y: f64) -> f64 {
    80.0 - x * x - y * y + 10.0 * (2.0 * PI * x).cos() + 10.0 * (2.0 * PI * y).cos()
}

/// How [`evaluate`] scores a population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalMode {
    /// Raw fitness only. Used once on the initial population.
    Init,
    /// Raw fitness divided by the niche count.
    Shared,
}

/// Accumulated sharing load of `cell` against `population`.
///
/// Every member (the cell itself included, at distance 0) within
/// `radius` contributes `1 - (d / radius)^alpha`. A zero total can only
/// arise from a degenerate `alpha` and is replaced by `1.0`.
pub fn niche_count(cell: &Cell, population: &[Cell], radius: f64, alpha: f64) -> f64 {
    let count: f64 = population
        .iter()
        .map(|other| cell.distance(other))
        .filter(|&d| d < radius)
        .map(|d| 1.0 - (d / radius).powf(alpha))
        .sum();

    if count == 0.0 {
        1.0
    } else {
        count
    }
}

/// Scores every cell in place.
///
/// In [`EvalMode::Shared`] all niche counts are taken against the same
/// gene positions, then each raw score is divided by its count.
pub fn evaluate(population: &mut [Cell], mode: EvalMode, radius: f64, alpha: f64) {
    for cell in population.iter_mut() {
        cell.fitness = fitness_func(cell.x, cell.y);
    }
    if mode == EvalMode::Init {
        return;
    }

    let positions: &[Cell] = population;
    let counts: Vec<f64> = positions
        .iter()
        .map(|cell| niche_count(cell, positions, radius, alpha))
        .collect();
    for (cell, count) in population.iter_mut().zip(counts) {
        cell.fitness /= count;
    }
}

/// Copy of `cell` carrying its unshared fitness.
pub fn with_raw_fitness(cell: &Cell) -> Cell {
    Cell::with_fitness(cell.x, cell.y, fitness_func(cell.x, cell.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fitness_at_origin() {
        assert_eq!(fitness_func(0.0, 0.0), 100.0);
    }

    #[test]
    fn test_fitness_at_unit_x() {
        assert_eq!(fitness_func(1.0, 0.0), 99.0);
    }

    #[test]
    fn test_fitness_is_symmetric() {
        assert_eq!(fitness_func(0.3, 0.7), fitness_func(0.7, 0.3));
        assert_eq!(fitness_func(1.0, 1.0), 98.0);
    }

    #[test]
    fn test_lone_cell_counts_once() {
        let cell = Cell::new(0.0, 0.0);
        let far = Cell::new(10.0, 10.0);
        assert_eq!(niche_count(&cell, &[cell, far], 0.25, 1.0), 1.0);
    }

    #[test]
    fn test_niche_count_linear_sharing() {
        let a = Cell::new(0.0, 0.0);
        let b = Cell::new(0.1, 0.0);
        // Self contributes 1, b contributes 1 - 0.1/0.25 = 0.6.
        let count = niche_count(&a, &[a, b], 0.25, 1.0);
        assert!((count - 1.6).abs() < 1e-12);
    }

    #[test]
    fn test_niche_count_boundary_excluded() {
        let a = Cell::new(0.0, 0.0);
        let b = Cell::new(0.25, 0.0);
        assert_eq!(niche_count(&a, &[a, b], 0.25, 1.0), 1.0);
    }

    #[test]
    fn test_zero_count_guard() {
        // alpha = 0 turns every contribution into 1 - 1 = 0.
        let a = Cell::new(0.0, 0.0);
        let b = Cell::new(0.1, 0.0);
        assert_eq!(niche_count(&a, &[a, b], 0.25, 0.0), 1.0);
    }

    #[test]
    fn test_init_mode_is_raw() {
        let mut pop = vec![Cell::new(0.0, 0.0), Cell::new(0.01, 0.0)];
        evaluate(&mut pop, EvalMode::Init, 0.25, 1.0);
        assert_eq!(pop[0].fitness, 100.0);
        assert_eq!(pop[1].fitness, fitness_func(0.01, 0.0));
    }

    #[test]
    fn test_shared_mode_penalizes_crowding() {
        let mut crowded = vec![Cell::new(0.0, 0.0); 4];
        crowded.push(Cell::new(1.0, 0.0));
        evaluate(&mut crowded, EvalMode::Shared, 0.25, 1.0);
        // Four identical cells share one slot; the lone cell keeps its score.
        assert!((crowded[0].fitness - 25.0).abs() < 1e-12);
        assert!((crowded[4].fitness - 99.0).abs() < 1e-12);
        assert!(crowded[4].fitness > crowded[0].fitness);
    }

    #[test]
    fn test_with_raw_fitness() {
        let shared = Cell::with_fitness(1.0, 0.0, 12.0);
        assert_eq!(with_raw_fitness(&shared).fitness, 99.0);
    }

    proptest! {
        #[test]
        fn prop_sharing_never_increases_fitness(
            coords in prop::collection::vec((-0.5f64..1.5, -0.5f64..1.5), 1..40),
            radius in 0.05f64..1.0,
            alpha in 0.5f64..3.0,
        ) {
            let mut pop: Vec<Cell> = coords.iter().map(|&(x, y)| Cell::new(x, y)).collect();
            evaluate(&mut pop, EvalMode::Shared, radius, alpha);
            for cell in &pop {
                let raw = fitness_func(cell.x, cell.y);
                prop_assert!(cell.fitness <= raw + 1e-9);
            }
        }

        #[test]
        fn prop_niche_count_at_least_one(
            coords in prop::collection::vec((-0.5f64..1.5, -0.5f64..1.5), 1..40),
            radius in 0.05f64..1.0,
            alpha in 0.5f64..3.0,
        ) {
            let pop: Vec<Cell> = coords.iter().map(|&(x, y)| Cell::new(x, y)).collect();
            for cell in &pop {
                prop_assert!(niche_count(cell, &pop, radius, alpha) >= 1.0 - 1e-12);
            }
        }
    }
}
