use super::*;
use crate::geom2::{CircleCfg, CircleSweep, CIRCLE_VERTICES};
use nalgebra::vector;

fn square_pts() -> Vec<Point> {
    vec![
        vector![0.0, 0.0],
        vector![10.0, 0.0],
        vector![10.0, 10.0],
        vector![0.0, 10.0],
    ]
}

#[test]
fn round_trip_create_add_destroy_clear_all() {
    let mut reg = PolygonRegistry::new();
    let other = reg.create(square_pts());
    let id = reg.create(vec![vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 4.0]]);
    assert!(reg.add_points(id, &[vector![-1.0, 2.0], vector![-2.0, 1.0]]));
    assert_eq!(reg.get(id).unwrap().len(), 5);
    assert_eq!(reg.count(), 2);

    assert!(reg.destroy(id));
    assert_eq!(reg.count(), 1);
    assert!(reg.get(id).is_none());
    assert!(!reg.destroy(id));
    assert!(reg.contains_id(other));

    reg.clear_all();
    assert_eq!(reg.count(), 0);
    assert!(reg.is_empty());
    assert!(reg.get(other).is_none());
}

#[test]
fn add_point_preserves_insertion_order() {
    let mut reg = PolygonRegistry::new();
    let id = reg.create_empty();
    for p in square_pts() {
        assert!(reg.add_point(id, p));
    }
    assert_eq!(reg.get(id).unwrap().points(), square_pts().as_slice());
    assert!(reg.is_inside(id, vector![5.0, 5.0]).unwrap());
}

#[test]
fn destroy_swaps_last_into_slot() {
    let mut reg = PolygonRegistry::new();
    let a = reg.create_named("a", square_pts());
    let b = reg.create_named("b", square_pts());
    let c = reg.create_named("c", square_pts());
    assert_eq!(reg.index_of(c), Some(2));

    assert!(reg.destroy(a));
    assert_eq!(reg.index_of(c), Some(0));
    assert_eq!(reg.get(c).unwrap().index(), 0);
    assert_eq!(reg.index_of(b), Some(1));
    let names: Vec<&str> = reg.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["c", "b"]);
    assert_eq!(reg.get_by_index(0).map(Polygon::id), Some(c));
}

#[test]
fn destroying_last_polygon_empties_registry() {
    let mut reg = PolygonRegistry::new();
    let only = reg.create(square_pts());
    assert!(reg.destroy(only));
    assert!(reg.is_empty());
    assert!(reg.get_by_index(0).is_none());
}

#[test]
fn ids_are_not_reused() {
    let mut reg = PolygonRegistry::new();
    let a = reg.create(square_pts());
    reg.destroy(a);
    let b = reg.create(square_pts());
    assert_ne!(a, b);
    reg.clear_all();
    let c = reg.create(square_pts());
    assert!(c != a && c != b);
    assert!(reg.get(b).is_none());
}

#[test]
fn remove_point_by_value() {
    let mut reg = PolygonRegistry::new();
    let id = reg.create(square_pts());
    assert!(reg.remove_point(id, vector![10.0, 0.0]));
    // last vertex took the freed slot
    assert_eq!(
        reg.get(id).unwrap().points(),
        &[vector![0.0, 0.0], vector![0.0, 10.0], vector![10.0, 10.0]]
    );
    // absent point: untouched
    assert!(!reg.remove_point(id, vector![7.0, 7.0]));
    assert_eq!(reg.get(id).unwrap().len(), 3);
}

#[test]
fn remove_point_with_single_vertex_clears() {
    let mut reg = PolygonRegistry::new();
    let id = reg.create(vec![vector![1.0, 1.0]]);
    // the remaining vertex goes even when it does not match
    assert!(reg.remove_point(id, vector![5.0, 5.0]));
    assert!(reg.get(id).unwrap().is_empty());
    assert!(!reg.remove_point(id, vector![1.0, 1.0]));
}

#[test]
fn remove_points_counts_changes() {
    let mut reg = PolygonRegistry::new();
    let id = reg.create(square_pts());
    let removed = reg.remove_points(
        id,
        &[vector![0.0, 0.0], vector![3.0, 3.0], vector![10.0, 10.0]],
    );
    assert_eq!(removed, 2);
    assert_eq!(reg.get(id).unwrap().len(), 2);
    assert_eq!(reg.remove_points(PolygonId(999), &[vector![0.0, 0.0]]), 0);
}

#[test]
fn clear_keeps_polygon_registered() {
    let mut reg = PolygonRegistry::new();
    let id = reg.create(square_pts());
    assert!(reg.clear(id));
    assert_eq!(reg.count(), 1);
    assert!(reg.get(id).unwrap().is_empty());
    assert_eq!(reg.is_inside(id, vector![5.0, 5.0]), Some(false));
    assert!(!reg.clear(PolygonId(42)));
}

#[test]
fn names_lookup_and_rename() {
    let mut reg = PolygonRegistry::new();
    let a = reg.create(square_pts());
    assert_eq!(reg.get(a).unwrap().name, "");
    assert!(reg.set_name(a, "north keep"));
    assert_eq!(reg.find_by_name("north keep"), Some(a));
    assert_eq!(reg.find_by_name("south"), None);
    assert!(!reg.set_name(PolygonId(77), "x"));
}

#[test]
fn containing_lists_overlapping_bases() {
    let mut reg = PolygonRegistry::new();
    let big = reg.create_named("big", square_pts());
    let small = reg.create_named(
        "small",
        vec![vector![2.0, 2.0], vector![4.0, 2.0], vector![4.0, 4.0], vector![2.0, 4.0]],
    );
    let far = reg.create_named("far", vec![vector![50.0, 50.0], vector![60.0, 50.0], vector![55.0, 60.0]]);
    assert_eq!(reg.containing(vector![3.0, 3.0]), vec![big, small]);
    assert_eq!(reg.containing(vector![8.0, 8.0]), vec![big]);
    assert!(reg.containing(vector![30.0, 30.0]).is_empty());
    assert_eq!(reg.is_inside(far, vector![55.0, 55.0]), Some(true));
    assert_eq!(reg.is_inside(PolygonId(1234), vector![0.0, 0.0]), None);
}

#[test]
fn registry_tolerance_applies_to_queries() {
    let tri = vec![vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 4.0]];
    let p = vector![2.0 + 1e-12, 2.0];
    let mut exact = PolygonRegistry::new();
    let e = exact.create(tri.clone());
    let mut loose = PolygonRegistry::with_cfg(GeomCfg::with_eps(1e-9));
    let l = loose.create(tri);
    assert_eq!(exact.is_inside(e, p), Some(false));
    assert_eq!(loose.is_inside(l, p), Some(true));
}

#[test]
fn circle_bases() {
    let mut reg = PolygonRegistry::new();
    let center = vector![256.0, -128.0];
    let id = reg.create_circle(center, 300.0);
    let circle = reg.get(id).unwrap();
    assert_eq!(circle.len(), CIRCLE_VERTICES);
    for p in circle.points() {
        assert!(((p - center).norm() - 300.0).abs() < 1e-9);
    }

    let full = reg.create_circle_with(
        center,
        300.0,
        CircleCfg {
            vertices: 48,
            sweep: CircleSweep::FullTurn,
        },
    );
    assert_eq!(reg.get(full).unwrap().len(), 48);
    assert_eq!(reg.is_inside(full, center + vector![1.0, 0.5]), Some(true));
    assert_eq!(reg.count(), 2);
}

#[test]
fn independent_registries() {
    let mut r1 = PolygonRegistry::new();
    let mut r2 = PolygonRegistry::new();
    r1.create(square_pts());
    r1.create(square_pts());
    r2.create(square_pts());
    assert_eq!(r1.count(), 2);
    assert_eq!(r2.count(), 1);
    assert_eq!((&r1).into_iter().count(), 2);
}
