//! Orientation, on-segment and segment-intersection predicates.
//!
//! The `*_eps` variants take the collinearity tolerance explicitly; the plain
//! variants use exact zero (`GeomCfg::default()`).

use super::types::{Orientation, Point};

/// Cross term `(b.y-a.y)*(c.x-b.x) - (b.x-a.x)*(c.y-b.y)`.
///
/// Positive for a clockwise turn a→b→c, negative for counterclockwise.
#[inline]
pub fn turn_value(a: Point, b: Point, c: Point) -> f64 {
    (b.y - a.y) * (c.x - b.x) - (b.x - a.x) * (c.y - b.y)
}

/// Orientation of the ordered triple with exact-zero collinearity.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> Orientation {
    orientation_eps(a, b, c, 0.0)
}

/// Orientation with `|turn| <= eps` treated as Collinear.
///
/// A NaN turn value (non-finite inputs) is reported as CounterClockwise.
#[inline]
pub fn orientation_eps(a: Point, b: Point, c: Point, eps: f64) -> Orientation {
    let val = turn_value(a, b, c);
    if val.abs() <= eps {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// True iff `test_pt` lies in the closed bounding box of `seg_start`/`seg_end`.
///
/// Pre: `test_pt` is collinear with the segment; collinearity is not checked here.
#[inline]
pub fn on_segment(seg_start: Point, test_pt: Point, seg_end: Point) -> bool {
    test_pt.x <= seg_start.x.max(seg_end.x)
        && test_pt.x >= seg_start.x.min(seg_end.x)
        && test_pt.y <= seg_start.y.max(seg_end.y)
        && test_pt.y >= seg_start.y.min(seg_end.y)
}

/// `on_segment` with the box padded by the distance band `eps / |seg_end - seg_start|`.
///
/// `eps` is in cross-product units, like `orientation_eps`. A zero-length
/// segment gets no padding.
pub fn on_segment_eps(seg_start: Point, test_pt: Point, seg_end: Point, eps: f64) -> bool {
    let len = (seg_end - seg_start).norm();
    let pad = if eps > 0.0 && len > 0.0 { eps / len } else { 0.0 };
    test_pt.x <= seg_start.x.max(seg_end.x) + pad
        && test_pt.x >= seg_start.x.min(seg_end.x) - pad
        && test_pt.y <= seg_start.y.max(seg_end.y) + pad
        && test_pt.y >= seg_start.y.min(seg_end.y) - pad
}

/// True iff segment `p1–q1` meets segment `p2–q2` (touching and collinear overlap included).
#[inline]
pub fn do_intersect(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    do_intersect_eps(p1, q1, p2, q2, 0.0)
}

pub fn do_intersect_eps(p1: Point, q1: Point, p2: Point, q2: Point, eps: f64) -> bool {
    let o1 = orientation_eps(p1, q1, p2, eps);
    let o2 = orientation_eps(p1, q1, q2, eps);
    let o3 = orientation_eps(p2, q2, p1, eps);
    let o4 = orientation_eps(p2, q2, q1, eps);

    // endpoints of each segment on opposite sides of the other's line
    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1.is_collinear() && on_segment(p1, p2, q1))
        || (o2.is_collinear() && on_segment(p1, q2, q1))
        || (o3.is_collinear() && on_segment(p2, p1, q2))
        || (o4.is_collinear() && on_segment(p2, q1, q2))
}
