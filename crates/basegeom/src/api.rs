//! Curated surface for hosts embedding the base geometry.
//!
//! Mirrors the operations a map script calls: predicates over raw
//! coordinates, polygon CRUD through the registry, and the circle helper.

pub use crate::geom2::{
    do_intersect, is_inside, on_segment, orientation, CircleCfg, CircleSweep, GeomCfg,
    Orientation, Point, CIRCLE_VERTICES,
};
pub use crate::registry::{Polygon, PolygonId, PolygonRegistry};

/// Register a circle base around `center` (30 vertices, half-turn sweep).
#[inline]
pub fn create_circle(registry: &mut PolygonRegistry, center: Point, radius: f64) -> PolygonId {
    registry.create_circle(center, radius)
}

/// Whether a unit standing at `p` is in the base `id`; unknown bases answer `false`.
#[inline]
pub fn unit_in_base(registry: &PolygonRegistry, id: PolygonId, p: Point) -> bool {
    registry.is_inside(id, p).unwrap_or(false)
}
