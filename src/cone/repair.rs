//! Volume-constraint repair.

use super::objective::volume;
use crate::ga::{Bounds, Cell};
use crate::GaError;
use rand::Rng;

/// Restores `volume(r, h) > min_volume` after a genetic operator.
///
/// A feasible point passes through unchanged. An infeasible one is
/// snapped to the best-ever cell plus `epsilon` on both genes once a best
/// exists; before that, both genes are resampled until the point is
/// feasible, giving up with [`GaError::ConstraintInfeasible`] after
/// `max_attempts` resamples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeRepair {
    pub r_bounds: Bounds,
    pub h_bounds: Bounds,
    pub min_volume: f64,
    pub epsilon: f64,
    pub max_attempts: usize,
}

impl VolumeRepair {
    pub fn is_feasible(&self, r: f64, h: f64) -> bool {
        volume(r, h) > self.min_volume
    }

    /// Returns a point satisfying the constraint, or snapped to `best`.
    ///
    /// The snap is returned without rechecking feasibility.
    pub fn repair<R: Rng>(
        &self,
        r: f64,
        h: f64,
        best: Option<&Cell>,
        rng: &mut R,
    ) -> Result<(f64, f64), GaError> {
        let (mut r, mut h) = (r, h);
        let mut attempts = 0usize;
        while !self.is_feasible(r, h) {
            if let Some(best) = best {
                return Ok((best.x + self.epsilon, best.y + self.epsilon));
            }
            if attempts >= self.max_attempts {
                log::warn!(
                    "volume repair gave up after {attempts} attempts (min volume {})",
                    self.min_volume
                );
                return Err(GaError::ConstraintInfeasible {
                    attempts,
                    min_volume: self.min_volume,
                });
            }
            r = self.r_bounds.sample(rng);
            h = self.h_bounds.sample(rng);
            attempts += 1;
        }
        Ok((r, h))
    }

    /// Repairs `cell` in place. Fitness is left stale.
    pub fn repair_cell<R: Rng>(
        &self,
        cell: &mut Cell,
        best: Option<&Cell>,
        rng: &mut R,
    ) -> Result<(), GaError> {
        let (r, h) = self.repair(cell.x, cell.y, best, rng)?;
        cell.x = r;
        cell.y = h;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn repairer() -> VolumeRepair {
        VolumeRepair {
            r_bounds: Bounds::new(0.0, 10.0),
            h_bounds: Bounds::new(0.0, 20.0),
            min_volume: 200.0,
            epsilon: 1e-4,
            max_attempts: 10_000,
        }
    }

    #[test]
    fn test_feasible_point_unchanged() {
        let mut rng = create_rng(42);
        assert_eq!(repairer().repair(5.0, 10.0, None, &mut rng), Ok((5.0, 10.0)));
    }

    #[test]
    fn test_boundary_is_infeasible() {
        // Strict inequality: exactly the threshold must be repaired.
        let rep = VolumeRepair {
            min_volume: volume(5.0, 10.0),
            ..repairer()
        };
        assert!(!rep.is_feasible(5.0, 10.0));
    }

    #[test]
    fn test_snaps_to_best() {
        let mut rng = create_rng(42);
        let best = Cell::with_fitness(6.0, 12.0, -300.0);
        let (r, h) = repairer().repair(0.1, 0.1, Some(&best), &mut rng).unwrap();
        assert!((r - 6.0001).abs() < 1e-12);
        assert!((h - 12.0001).abs() < 1e-12);
    }

    #[test]
    fn test_resamples_without_best() {
        let mut rng = create_rng(42);
        let rep = repairer();
        let (r, h) = rep.repair(0.1, 0.1, None, &mut rng).unwrap();
        assert!(rep.is_feasible(r, h));
        assert!(rep.r_bounds.contains(r));
        assert!(rep.h_bounds.contains(h));
    }

    #[test]
    fn test_infeasible_bounds_fail() {
        let rep = VolumeRepair {
            r_bounds: Bounds::new(0.0, 1.0),
            h_bounds: Bounds::new(0.0, 1.0),
            max_attempts: 50,
            ..repairer()
        };
        let mut rng = create_rng(42);
        assert_eq!(
            rep.repair(0.5, 0.5, None, &mut rng),
            Err(GaError::ConstraintInfeasible {
                attempts: 50,
                min_volume: 200.0,
            })
        );
    }

    #[test]
    fn test_repair_cell() {
        let mut rng = create_rng(42);
        let mut cell = Cell::with_fitness(0.2, 0.3, -1.0);
        repairer().repair_cell(&mut cell, None, &mut rng).unwrap();
        assert!(repairer().is_feasible(cell.x, cell.y));
    }

    proptest! {
        #[test]
        fn prop_repaired_points_are_feasible(
            seed in any::<u64>(),
            r in 0.0f64..10.0,
            h in 0.0f64..20.0,
        ) {
            let mut rng = create_rng(seed);
            let rep = repairer();
            let (r, h) = rep.repair(r, h, None, &mut rng).unwrap();
            prop_assert!(volume(r, h) > 200.0);
        }
    }
}
