//! Registry of live base polygons (arena + index).
//!
//! Model
//! - Polygons live densely in creation order; destroying one moves the last
//!   polygon into its slot (O(1)), so indices shift while `PolygonId`s stay valid.
//! - The registry is a plain value owned by the caller. Independent registries
//!   never share state.
//!
//! Code cross-refs: `geom2::is_inside_eps`, `geom2::circle_points`

mod types;

use std::collections::HashMap;

use crate::geom2::{circle_points, CircleCfg, GeomCfg, Point};

pub use types::{Polygon, PolygonId};

/// Live polygons plus the id → index table.
#[derive(Clone, Debug, Default)]
pub struct PolygonRegistry {
    polygons: Vec<Polygon>,
    slots: HashMap<PolygonId, usize>,
    next_id: u64,
    cfg: GeomCfg,
}

impl PolygonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry whose containment queries use `cfg`.
    pub fn with_cfg(cfg: GeomCfg) -> Self {
        Self {
            cfg,
            ..Self::default()
        }
    }

    #[inline]
    pub fn cfg(&self) -> GeomCfg {
        self.cfg
    }

    /// Register a polygon with the given vertices; it takes the next index.
    pub fn create(&mut self, points: Vec<Point>) -> PolygonId {
        let id = PolygonId(self.next_id);
        self.next_id += 1;
        let index = self.polygons.len();
        tracing::debug!(id = id.0, index, vertices = points.len(), "polygon created");
        self.polygons.push(Polygon::new(id, index, points));
        self.slots.insert(id, index);
        id
    }

    /// Empty polygon, to be filled point by point while a player draws.
    #[inline]
    pub fn create_empty(&mut self) -> PolygonId {
        self.create(Vec::new())
    }

    pub fn create_named(&mut self, name: impl Into<String>, points: Vec<Point>) -> PolygonId {
        let id = self.create(points);
        if let Some(poly) = self.polygons.last_mut() {
            poly.name = name.into();
        }
        id
    }

    /// Circle approximation registered as a new polygon (default 30 vertices, half-turn sweep).
    #[inline]
    pub fn create_circle(&mut self, center: Point, radius: f64) -> PolygonId {
        self.create_circle_with(center, radius, CircleCfg::default())
    }

    pub fn create_circle_with(&mut self, center: Point, radius: f64, cfg: CircleCfg) -> PolygonId {
        self.create(circle_points(center, radius, cfg))
    }

    /// Remove a polygon by swapping the last one into its slot.
    ///
    /// Destroying the only polygon leaves the registry empty. Unknown or stale
    /// ids return `false`.
    pub fn destroy(&mut self, id: PolygonId) -> bool {
        let Some(index) = self.slots.remove(&id) else {
            return false;
        };
        self.polygons.swap_remove(index);
        if let Some(moved) = self.polygons.get_mut(index) {
            moved.index = index;
            self.slots.insert(moved.id, index);
        }
        tracing::debug!(id = id.0, index, remaining = self.polygons.len(), "polygon destroyed");
        true
    }

    #[inline]
    pub fn get(&self, id: PolygonId) -> Option<&Polygon> {
        self.slots.get(&id).map(|&i| &self.polygons[i])
    }

    #[inline]
    pub fn get_mut(&mut self, id: PolygonId) -> Option<&mut Polygon> {
        let i = *self.slots.get(&id)?;
        self.polygons.get_mut(i)
    }

    #[inline]
    pub fn get_by_index(&self, index: usize) -> Option<&Polygon> {
        self.polygons.get(index)
    }

    #[inline]
    pub fn index_of(&self, id: PolygonId) -> Option<usize> {
        self.slots.get(&id).copied()
    }

    #[inline]
    pub fn contains_id(&self, id: PolygonId) -> bool {
        self.slots.contains_key(&id)
    }

    /// First polygon (lowest index) carrying `name`.
    pub fn find_by_name(&self, name: &str) -> Option<PolygonId> {
        self.polygons.iter().find(|p| p.name == name).map(|p| p.id)
    }

    pub fn set_name(&mut self, id: PolygonId, name: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(p) => {
                p.name = name.into();
                true
            }
            None => false,
        }
    }

    pub fn add_point(&mut self, id: PolygonId, p: Point) -> bool {
        self.get_mut(id).map(|poly| poly.add_point(p)).is_some()
    }

    pub fn add_points(&mut self, id: PolygonId, pts: &[Point]) -> bool {
        self.get_mut(id).map(|poly| poly.add_points(pts)).is_some()
    }

    /// See `Polygon::remove_point`; `false` also for unknown ids.
    pub fn remove_point(&mut self, id: PolygonId, p: Point) -> bool {
        self.get_mut(id).is_some_and(|poly| poly.remove_point(p))
    }

    pub fn remove_points(&mut self, id: PolygonId, pts: &[Point]) -> usize {
        self.get_mut(id).map_or(0, |poly| poly.remove_points(pts))
    }

    /// Drop all vertices; the polygon stays registered.
    pub fn clear(&mut self, id: PolygonId) -> bool {
        self.get_mut(id).map(Polygon::clear).is_some()
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.polygons.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Live polygons in index order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Polygon> {
        self.polygons.iter()
    }

    /// Forget every polygon. Ids handed out before stay invalid afterwards.
    pub fn clear_all(&mut self) {
        tracing::debug!(dropped = self.polygons.len(), "registry cleared");
        self.polygons.clear();
        self.slots.clear();
    }

    /// `None` for unknown ids.
    pub fn is_inside(&self, id: PolygonId, p: Point) -> Option<bool> {
        self.get(id).map(|poly| poly.is_inside_eps(p, self.cfg))
    }

    /// Ids of every polygon containing `p` (boundary included), in index order.
    pub fn containing(&self, p: Point) -> Vec<PolygonId> {
        self.polygons
            .iter()
            .filter(|poly| poly.is_inside_eps(p, self.cfg))
            .map(Polygon::id)
            .collect()
    }
}

impl<'a> IntoIterator for &'a PolygonRegistry {
    type Item = &'a Polygon;
    type IntoIter = std::slice::Iter<'a, Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests;
