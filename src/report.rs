//! Plain-text summaries of finished runs.
//!
//! These types only format data that a run already produced; printing
//! and plotting stay with the caller. [`sample_grid`] supplies the data
//! an external plotting tool needs to draw a fitness surface.

use crate::cone::volume;
use crate::ga::Cell;
use std::fmt;

/// Which optimizer produced the history, deciding how fitness is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Fitness shown as-is.
    Niche,
    /// Fitness shown as a positive area, with the cone volume.
    Cone,
}

/// Every `interval`-th generation best followed by the all-time best.
#[derive(Debug, Clone)]
pub struct GenerationReport<'a> {
    kind: ReportKind,
    history: &'a [Cell],
    best: &'a Cell,
    best_iter: Option<usize>,
    interval: usize,
}

impl<'a> GenerationReport<'a> {
    pub fn niche(
        history: &'a [Cell],
        best: &'a Cell,
        best_iter: Option<usize>,
        interval: usize,
    ) -> Self {
        Self {
            kind: ReportKind::Niche,
            history,
            best,
            best_iter,
            interval: interval.max(1),
        }
    }

    pub fn cone(
        history: &'a [Cell],
        best: &'a Cell,
        best_iter: Option<usize>,
        interval: usize,
    ) -> Self {
        Self {
            kind: ReportKind::Cone,
            history,
            best,
            best_iter,
            interval: interval.max(1),
        }
    }

    pub fn kind(&self) -> ReportKind {
        self.kind
    }

    /// `(generation, cell)` pairs that appear in the table.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &'a Cell)> + '_ {
        self.history.iter().enumerate().step_by(self.interval)
    }
}

impl fmt::Display for GenerationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (iter, cell) in self.rows() {
            writeln!(f, "Iteration: {iter}")?;
            match self.kind {
                ReportKind::Niche => {
                    writeln!(f, "Best fitness: {}", cell.fitness)?;
                    writeln!(f, "(x, y): ({}, {})", cell.x, cell.y)?;
                }
                ReportKind::Cone => {
                    writeln!(f, "Best fitness: {:.4}", -cell.fitness)?;
                    writeln!(f, "Best volume: {:.4}", volume(cell.x, cell.y))?;
                    writeln!(f, "(r, h): ({:.4}, {:.4})", cell.x, cell.y)?;
                }
            }
            writeln!(f, "========")?;
            writeln!(f)?;
        }

        if self.best.is_sentinel() {
            return writeln!(f, "No best recorded");
        }
        match self.kind {
            ReportKind::Niche => {
                writeln!(f, "All best fitness: {}", self.best.fitness)?;
                writeln!(f, "All best (x, y): ({}, {})", self.best.x, self.best.y)?;
            }
            ReportKind::Cone => {
                writeln!(f, "All best fitness: {:.4}", -self.best.fitness)?;
                writeln!(
                    f,
                    "All best volume: {:.4}",
                    volume(self.best.x, self.best.y)
                )?;
                writeln!(
                    f,
                    "All best (r, h): ({:.4}, {:.4})",
                    self.best.x, self.best.y
                )?;
            }
        }
        match self.best_iter {
            Some(iter) => writeln!(f, "All best iter: {iter}"),
            None => writeln!(f, "All best iter: -"),
        }
    }
}

/// Numbered listing of extracted peaks.
#[derive(Debug, Clone, Copy)]
pub struct PeakReport<'a>(pub &'a [Cell]);

impl fmt::Display for PeakReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Found {} peaks", self.0.len())?;
        for (i, peak) in self.0.iter().enumerate() {
            writeln!(f, "Peak {i}")?;
            writeln!(f, "fitness = {}", peak.fitness)?;
            writeln!(f, "(x, y) = ({:.4}, {:.4})", peak.x, peak.y)?;
            writeln!(f, "----")?;
        }
        Ok(())
    }
}

/// Samples `func` on the square grid `[lower, upper)²` with spacing `step`.
///
/// Rows are `(x, y, func(x, y))`, `y` varying fastest. A non-positive or
/// non-finite `step`, or an empty interval, yields no rows.
pub fn sample_grid<F>(func: F, lower: f64, upper: f64, step: f64) -> Vec<(f64, f64, f64)>
where
    F: Fn(f64, f64) -> f64,
{
    if !(step > 0.0 && step.is_finite()) || !(upper > lower) {
        return Vec::new();
    }
    let n = ((upper - lower) / step).ceil() as usize;
    let axis: Vec<f64> = (0..n)
        .map(|i| lower + i as f64 * step)
        .filter(|&v| v < upper)
        .collect();

    let mut rows = Vec::with_capacity(axis.len() * axis.len());
    for &x in &axis {
        for &y in &axis {
            rows.push((x, y, func(x, y)));
        }
    }
    rows
}
