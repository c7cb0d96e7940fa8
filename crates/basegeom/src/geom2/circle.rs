//! Regular-polygon approximation of a circle.
//!
//! Vertex k sits at `center + radius * (sin θ_k, cos θ_k)`. The default sweep
//! steps θ over a half turn (`θ_k = k·π/n`), which is the shape existing maps
//! were saved with; `CircleSweep::FullTurn` gives the closed ring `θ_k = k·2π/n`.

use std::f64::consts::{PI, TAU};

use super::types::Point;

/// Default vertex count for circle bases.
pub const CIRCLE_VERTICES: usize = 30;

/// Angular range covered by the vertices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CircleSweep {
    #[default]
    HalfTurn,
    FullTurn,
}

/// Circle approximation configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CircleCfg {
    pub vertices: usize,
    pub sweep: CircleSweep,
}

impl Default for CircleCfg {
    fn default() -> Self {
        Self {
            vertices: CIRCLE_VERTICES,
            sweep: CircleSweep::HalfTurn,
        }
    }
}

impl CircleCfg {
    #[inline]
    fn step(&self) -> f64 {
        let total = match self.sweep {
            CircleSweep::HalfTurn => PI,
            CircleSweep::FullTurn => TAU,
        };
        total / self.vertices as f64
    }
}

/// Vertices of the approximation, in sweep order. Zero vertices yields an empty list.
pub fn circle_points(center: Point, radius: f64, cfg: CircleCfg) -> Vec<Point> {
    if cfg.vertices == 0 {
        return Vec::new();
    }
    let step = cfg.step();
    (0..cfg.vertices)
        .map(|k| {
            let theta = step * k as f64;
            center + Point::new(theta.sin(), theta.cos()) * radius
        })
        .collect()
}
