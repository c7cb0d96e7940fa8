//! 2D geometry for base regions.
//!
//! Purpose
//! - One shared home for the predicates every base query goes through:
//!   orientation, on-segment, segment intersection, ray-casting containment.
//! - Numerics are explicit: exact zero collinearity by default, an opt-in
//!   tolerance through `GeomCfg`.
//!
//! Code cross-refs: `registry::Polygon::is_inside`, `circle::circle_points`

pub mod circle;
pub mod pip;
pub mod predicates;
pub mod rand;
mod types;

pub use circle::{circle_points, CircleCfg, CircleSweep, CIRCLE_VERTICES};
pub use pip::{is_inside, is_inside_eps};
pub use predicates::{
    do_intersect, do_intersect_eps, on_segment, on_segment_eps, orientation, orientation_eps,
    turn_value,
};
pub use types::{GeomCfg, Orientation, Point};
