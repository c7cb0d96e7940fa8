//! Geometry core for player-drawn base regions.
//!
//! - `geom2`: orientation, segment intersection, ray-casting containment, circles.
//! - `registry`: named base polygons with stable handles.
//!
//! Hosts (chat commands, map triggers, the `bases` CLI) feed raw coordinates in
//! and read booleans or handles back; nothing here knows where points come from.

pub mod api;
pub mod geom2;
pub mod registry;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{GeomCfg, Orientation, Point};
pub use registry::{Polygon, PolygonId, PolygonRegistry};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_base_polygon, RandomBaseCfg, ReplayToken, VertexCount};
    pub use crate::geom2::{
        circle_points, do_intersect, is_inside, on_segment, orientation, CircleCfg, CircleSweep,
        GeomCfg, Orientation, Point,
    };
    pub use crate::registry::{Polygon, PolygonId, PolygonRegistry};
}
