//! Cone area objectives and the volume constraint.
//!
//! With radius `r` and height `h`, the three objectives return negated
//! areas, so maximizing fitness minimizes the real (positive) area.

use std::f64::consts::PI;
use std::fmt;

/// Negated base disc area `-π r²`.
pub fn base_area(r: f64, _h: f64) -> f64 {
    -PI * r * r
}

/// Negated lateral surface area `-π r √(r² + h²)`.
pub fn surface_area(r: f64, h: f64) -> f64 {
    -PI * r * r.hypot(h)
}

/// Negated total area: base plus lateral.
pub fn total_area(r: f64, h: f64) -> f64 {
    base_area(r, h) + surface_area(r, h)
}

/// Cone volume `π r² h / 3`. Used only as a constraint.
pub fn volume(r: f64, h: f64) -> f64 {
    PI * r * r * h / 3.0
}

/// One of the rotating area objectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Objective {
    TotalArea,
    BaseArea,
    SurfaceArea,
}

impl Objective {
    /// The rotation in index order.
    pub const ROTATION: [Objective; 3] = [
        Objective::TotalArea,
        Objective::BaseArea,
        Objective::SurfaceArea,
    ];

    /// Fitness of `(r, h)` under this objective.
    pub fn evaluate(self, r: f64, h: f64) -> f64 {
        match self {
            Objective::TotalArea => total_area(r, h),
            Objective::BaseArea => base_area(r, h),
            Objective::SurfaceArea => surface_area(r, h),
        }
    }

    /// Position in [`ROTATION`](Self::ROTATION).
    pub fn index(self) -> usize {
        match self {
            Objective::TotalArea => 0,
            Objective::BaseArea => 1,
            Objective::SurfaceArea => 2,
        }
    }

    /// The objective that follows this one on a stagnation switch.
    ///
    /// Advances one slot modulo 3, but a wrap onto index 0 is redirected
    /// to index 1: once left, `TotalArea` is never re-entered, giving
    /// `Total → Base → Surface → Base → Surface → ...`. The asymmetry is
    /// intentional and must be kept.
    pub fn next(self) -> Objective {
        let idx = (self.index() + 1) % Self::ROTATION.len();
        if idx == 0 {
            Objective::BaseArea
        } else {
            Self::ROTATION[idx]
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Objective::TotalArea => "total_area",
            Objective::BaseArea => "base_area",
            Objective::SurfaceArea => "surface_area",
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
