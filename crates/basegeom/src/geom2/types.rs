//! Basic 2D types and tolerances used by the base predicates.
//!
//! - `Point`: plain `(x, y)` value, `nalgebra::Vector2<f64>`.
//! - `Orientation`: rotational sense of an ordered point triple.
//! - `GeomCfg`: centralizes the collinearity tolerance.
//!
//! Code cross-refs: `predicates::{orientation_eps, do_intersect_eps}`, `pip::is_inside_eps`

use nalgebra::Vector2;

/// A vertex or query location in map coordinates.
pub type Point = Vector2<f64>;

/// Geometry configuration (tolerances).
///
/// `eps_collinear = 0.0` reproduces the exact-zero comparison: only a cross
/// product of exactly zero is Collinear, so near-collinear triples may land on
/// either side. A positive value widens the boundary band used by
/// `is_inside` and the collinear branches of `do_intersect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps_collinear: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_collinear: 0.0 }
    }
}

impl GeomCfg {
    /// Tolerant configuration; negative or non-finite inputs fall back to exact.
    #[inline]
    pub fn with_eps(eps: f64) -> Self {
        let eps_collinear = if eps.is_finite() && eps > 0.0 { eps } else { 0.0 };
        Self { eps_collinear }
    }
}

/// Rotational sense of three ordered points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    /// Orientation of the reversed triple: Clockwise and CounterClockwise swap.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Collinear => Orientation::Collinear,
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
        }
    }
    #[inline]
    pub fn is_collinear(self) -> bool {
        matches!(self, Orientation::Collinear)
    }
}
