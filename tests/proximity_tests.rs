use std::collections::HashSet;

use nannou::prelude::*;

use plexus::field::ParticleField;
use plexus::params::SimulationParams;
use plexus::proximity::{Edge, ProximityGraph};
use plexus::sphere::Sphere;

/// A stationary sphere at the given position
fn sphere_at(x: f32, y: f32, z: f32) -> Sphere {
    Sphere {
        position: vec3(x, y, z),
        velocity: Vec3::ZERO,
        rotation: Vec2::ZERO,
        color: rgb(220, 220, 220),
    }
}

fn default_graph() -> ProximityGraph {
    ProximityGraph::new(&SimulationParams::default())
}

// ==================================================================================
// Distance predicate tests
// ==================================================================================

#[test]
fn close_pair_is_linked_and_far_pair_is_not() {
    let mut graph = default_graph();
    let mut spheres = vec![sphere_at(0.0, 0.0, 0.0), sphere_at(5.0, 0.0, 0.0)];

    assert_eq!(graph.rebuild(&spheres), &[Edge { a: 0, b: 1 }]);

    // Move the second sphere out of range; the edge set is rebuilt from
    // scratch, so the old edge disappears immediately
    spheres[1].position = vec3(20.0, 0.0, 0.0);
    assert!(graph.rebuild(&spheres).is_empty());
}

#[test]
fn distance_exactly_at_threshold_is_excluded() {
    let mut graph = default_graph();
    let spheres = vec![sphere_at(0.0, 0.0, 0.0), sphere_at(15.0, 0.0, 0.0)];

    assert!(graph.rebuild(&spheres).is_empty());
}

#[test]
fn distance_just_under_threshold_is_included() {
    let mut graph = default_graph();
    let spheres = vec![sphere_at(0.0, 0.0, 0.0), sphere_at(14.99, 0.0, 0.0)];

    assert_eq!(graph.rebuild(&spheres).len(), 1);
}

#[test]
fn distance_is_euclidean_not_per_axis() {
    let mut graph = default_graph();
    // 10.0 on two axes: each axis is within the threshold but the diagonal
    // distance is ~14.14, still linked; 11.0 on two axes is ~15.56, not linked
    let near = vec![sphere_at(0.0, 0.0, 0.0), sphere_at(10.0, 10.0, 0.0)];
    let far = vec![sphere_at(0.0, 0.0, 0.0), sphere_at(11.0, 11.0, 0.0)];

    assert_eq!(graph.rebuild(&near).len(), 1);
    assert!(graph.rebuild(&far).is_empty());
}

// ==================================================================================
// Edge set shape tests
// ==================================================================================

#[test]
fn coincident_cloud_links_every_pair_once() {
    let mut graph = default_graph();
    let spheres: Vec<Sphere> = (0..6).map(|_| sphere_at(0.0, 0.0, 0.0)).collect();

    let edges = graph.rebuild(&spheres).to_vec();

    // 6 choose 2 edges, all distinct, all ordered a < b
    assert_eq!(edges.len(), 15);
    let unique: HashSet<Edge> = edges.iter().copied().collect();
    assert_eq!(unique.len(), edges.len());
    for edge in &edges {
        assert!(edge.a < edge.b);
    }
}

#[test]
fn rebuild_is_idempotent_for_unchanged_input() {
    let field = ParticleField::new(&{
        let mut params = SimulationParams::default();
        params.seed = Some(5);
        params
    });
    let mut graph = default_graph();

    let first = graph.rebuild(&field.spheres).to_vec();
    let second = graph.rebuild(&field.spheres).to_vec();

    assert_eq!(first, second);
}

#[test]
fn empty_field_has_no_edges() {
    let mut graph = default_graph();
    assert!(graph.rebuild(&[]).is_empty());
}

// ==================================================================================
// Spatial grid equivalence tests
// ==================================================================================

#[test]
fn grid_path_matches_pairwise_scan() {
    let mut params = SimulationParams::default();
    params.num_points = 200;
    params.seed = Some(9);
    // Spawn wider than the bounding cube so some spheres sit past the walls,
    // exercising the grid's border clamping
    params.spawn_extent = 60.0;
    let field = ParticleField::new(&params);

    let mut pairwise = ProximityGraph::new(&params);
    let scanned = pairwise.rebuild(&field.spheres).to_vec();

    params.enable_spatial_grid = true;
    let mut accelerated = ProximityGraph::new(&params);
    let gridded = accelerated.rebuild(&field.spheres).to_vec();

    assert!(!scanned.is_empty());
    assert_eq!(scanned, gridded);
}

#[test]
fn grid_toggle_can_change_mid_run() {
    let mut params = SimulationParams::default();
    params.num_points = 50;
    params.seed = Some(13);
    let field = ParticleField::new(&params);

    let mut graph = ProximityGraph::new(&params);
    let scanned = graph.rebuild(&field.spheres).to_vec();

    params.enable_spatial_grid = true;
    graph.configure(&params);
    let gridded = graph.rebuild(&field.spheres).to_vec();

    assert_eq!(scanned, gridded);
}

#[test]
fn configure_picks_up_a_new_threshold() {
    let mut params = SimulationParams::default();
    let mut graph = ProximityGraph::new(&params);
    let spheres = vec![sphere_at(0.0, 0.0, 0.0), sphere_at(10.0, 0.0, 0.0)];

    assert_eq!(graph.rebuild(&spheres).len(), 1);

    params.link_threshold = 5.0;
    graph.configure(&params);
    assert_eq!(graph.threshold(), 5.0);
    assert!(graph.rebuild(&spheres).is_empty());
}
