//! Base polygon and its handle.

use crate::geom2::{is_inside_eps, GeomCfg, Point};

/// Stable handle to a polygon; never reused within one registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PolygonId(pub u64);

/// Named base region: vertices in perimeter order, edge i joins vertex i and (i+1) mod N.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub(crate) id: PolygonId,
    pub(crate) index: usize,
    pub name: String,
    pub(crate) points: Vec<Point>,
}

impl Polygon {
    pub(crate) fn new(id: PolygonId, index: usize, points: Vec<Point>) -> Self {
        Self {
            id,
            index,
            name: String::new(),
            points,
        }
    }

    #[inline]
    pub fn id(&self) -> PolygonId {
        self.id
    }
    /// Current position in the registry; changes when an earlier polygon is destroyed.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn add_point(&mut self, p: Point) {
        self.points.push(p);
    }

    pub fn add_points(&mut self, pts: &[Point]) {
        self.points.extend_from_slice(pts);
    }

    /// Remove the first vertex equal to `p` (swap-with-last, so order is not kept).
    ///
    /// With one vertex left the list is cleared whatever `p` is. A point that is
    /// not a vertex leaves the list untouched. Returns whether anything changed.
    pub fn remove_point(&mut self, p: Point) -> bool {
        if self.points.len() <= 1 {
            let had = !self.points.is_empty();
            self.points.clear();
            return had;
        }
        match self.points.iter().position(|v| *v == p) {
            Some(i) => {
                self.points.swap_remove(i);
                true
            }
            None => false,
        }
    }

    /// `remove_point` for each entry in turn; returns how many calls changed the list.
    pub fn remove_points(&mut self, pts: &[Point]) -> usize {
        pts.iter().filter(|&&p| self.remove_point(p)).count()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Inside-or-on-boundary with exact collinearity.
    #[inline]
    pub fn is_inside(&self, p: Point) -> bool {
        self.is_inside_eps(p, GeomCfg::default())
    }

    #[inline]
    pub fn is_inside_eps(&self, p: Point, cfg: GeomCfg) -> bool {
        is_inside_eps(&self.points, p, cfg)
    }
}
