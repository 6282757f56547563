//! Best-individual bookkeeping across generations.

use super::types::Cell;

/// Returns a copy of the highest-fitness cell, or `None` if the
/// population is empty. Ties go to the earliest cell.
pub fn find_best(population: &[Cell]) -> Option<Cell> {
    let mut best: Option<Cell> = None;
    for cell in population {
        if best.map_or(true, |b| cell.fitness > b.fitness) {
            best = Some(*cell);
        }
    }
    best
}

/// Tracks the best-ever cell and the per-generation best history.
///
/// `best()` starts as [`Cell::sentinel`] and only ever moves to a cell
/// with strictly higher fitness, so its fitness never decreases and is
/// at least every recorded generation best.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestTracker {
    best: Cell,
    best_iter: Option<usize>,
    history: Vec<Cell>,
}

impl Default for BestTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl BestTracker {
    pub fn new() -> Self {
        Self {
            best: Cell::sentinel(),
            best_iter: None,
            history: Vec::new(),
        }
    }

    /// Appends `generation_best` to the history and promotes it to the
    /// best-ever cell if it is strictly better.
    ///
    /// Returns `true` on promotion.
    pub fn record(&mut self, generation: usize, generation_best: Cell) -> bool {
        self.history.push(generation_best);
        if self.best.fitness < generation_best.fitness {
            self.best = generation_best;
            self.best_iter = Some(generation);
            true
        } else {
            false
        }
    }

    /// The best-ever cell, or the sentinel before any promotion.
    pub fn best(&self) -> &Cell {
        &self.best
    }

    /// The best-ever cell, if one has been recorded.
    pub fn known_best(&self) -> Option<&Cell> {
        if self.best.is_sentinel() {
            None
        } else {
            Some(&self.best)
        }
    }

    /// Generation index at which the best-ever cell was found.
    pub fn best_iter(&self) -> Option<usize> {
        self.best_iter
    }

    /// Best cell of every generation, in generation order.
    pub fn history(&self) -> &[Cell] {
        &self.history
    }

    pub fn into_history(self) -> Vec<Cell> {
        self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_best_first_max() {
        let pop = vec![
            Cell::with_fitness(0.0, 0.0, 1.0),
            Cell::with_fitness(1.0, 0.0, 3.0),
            Cell::with_fitness(2.0, 0.0, 3.0),
        ];
        let best = find_best(&pop).unwrap();
        assert_eq!(best.x, 1.0);
        assert!(find_best(&[]).is_none());
    }

    #[test]
    fn test_find_best_negative() {
        let pop = vec![
            Cell::with_fitness(0.0, 0.0, -50.0),
            Cell::with_fitness(1.0, 0.0, -10.0),
        ];
        assert_eq!(find_best(&pop).unwrap().fitness, -10.0);
    }

    #[test]
    fn test_tracker_starts_at_sentinel() {
        let tracker = BestTracker::new();
        assert!(tracker.best().is_sentinel());
        assert!(tracker.known_best().is_none());
        assert!(tracker.best_iter().is_none());
    }

    #[test]
    fn test_tracker_monotonic() {
        let mut tracker = BestTracker::new();
        let fitnesses = [5.0, 3.0, 7.0, 7.0, 6.0, 9.0];
        let mut previous = f64::NEG_INFINITY;
        for (gen, &f) in fitnesses.iter().enumerate() {
            tracker.record(gen, Cell::with_fitness(gen as f64, 0.0, f));
            assert!(tracker.best().fitness >= previous);
            previous = tracker.best().fitness;
        }
        assert_eq!(tracker.best().fitness, 9.0);
        assert_eq!(tracker.best_iter(), Some(5));
        assert_eq!(tracker.history().len(), fitnesses.len());
        for cell in tracker.history() {
            assert!(tracker.best().fitness >= cell.fitness);
        }
    }

    #[test]
    fn test_tracker_ties_keep_first() {
        let mut tracker = BestTracker::new();
        assert!(tracker.record(0, Cell::with_fitness(0.0, 0.0, 4.0)));
        assert!(!tracker.record(1, Cell::with_fitness(1.0, 0.0, 4.0)));
        assert_eq!(tracker.best_iter(), Some(0));
    }
}
