//! Ray-casting point-in-polygon.
//!
//! Model
//! - Cast a horizontal ray from the query point toward +x and count the edges
//!   it meets; an odd count means inside.
//! - A point collinear with an edge the ray meets is decided by that edge
//!   alone: on the edge counts as inside, so base borders belong to the base.
//! - The far end of the ray is a finite point just past the polygon's largest
//!   x. An infinite coordinate would make every cross product with it NaN.
//!   Its x saturates at `f64::MAX`; coordinates near that bound overflow
//!   the cross products anyway and are outside the supported range.
//! - With a positive tolerance, a point within the band of an edge it lies
//!   alongside is on the boundary. A point in the band of the edge's line but
//!   past its ends falls back to the exact rule.

use super::predicates::{
    do_intersect_eps, on_segment, on_segment_eps, orientation, orientation_eps,
};
use super::types::{GeomCfg, Point};

/// Inside-or-on-boundary test with exact collinearity.
///
/// Fewer than 3 vertices is never inside.
#[inline]
pub fn is_inside(vertices: &[Point], p: Point) -> bool {
    is_inside_eps(vertices, p, GeomCfg::default())
}

pub fn is_inside_eps(vertices: &[Point], p: Point, cfg: GeomCfg) -> bool {
    let n = vertices.len();
    if n < 3 || !p.x.is_finite() || !p.y.is_finite() {
        return false;
    }
    let eps = cfg.eps_collinear;
    let extreme = Point::new(ray_end_x(vertices, p), p.y);

    let mut count = 0usize;
    let mut i = 0usize;
    loop {
        let next = (i + 1) % n;
        let (a, b) = (vertices[i], vertices[next]);
        if do_intersect_eps(a, b, p, extreme, eps) {
            if orientation_eps(a, p, b, eps).is_collinear() {
                if on_segment_eps(a, p, b, eps) {
                    return true;
                }
                if orientation(a, p, b).is_collinear() {
                    return on_segment(a, p, b);
                }
            }
            count += 1;
        }
        i = next;
        if i == 0 {
            break;
        }
    }
    count % 2 == 1
}

/// x of the ray's far end: strictly right of the query point and of every vertex.
fn ray_end_x(vertices: &[Point], p: Point) -> f64 {
    let max_x = vertices
        .iter()
        .map(|v| v.x)
        .filter(|x| x.is_finite())
        .fold(p.x, f64::max);
    let end_x = max_x + 1.0 + max_x.abs() * f64::EPSILON * 4.0;
    if end_x.is_finite() {
        end_x
    } else {
        f64::MAX
    }
}
