/*
 * Scene Module
 *
 * This module defines the narrow contract between the animation core and
 * whatever draws it. The core registers a visual per sphere once, then each
 * frame pushes per-sphere transforms and hands over a freshly computed set of
 * line segments that replaces the previous one wholesale. Keeping the core on
 * this side of the trait lets it run headless in tests.
 */

use nannou::prelude::*;

use crate::field::ParticleField;
use crate::proximity::ProximityGraph;

// Opaque identifier for a registered point visual
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointHandle(usize);

impl PointHandle {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

pub trait SceneRenderer {
    // Register a renderable point and return a handle for later updates
    fn register_point(&mut self, position: Vec3) -> PointHandle;

    // Push the per-frame transform state for one point
    fn update_point(&mut self, handle: PointHandle, position: Vec3, rotation: Vec2);

    // Replace all currently rendered connecting lines with the given set
    fn set_line_segments(&mut self, segments: &[(PointHandle, PointHandle)]);
}

// Register one visual per sphere, in field order
pub fn register_field(
    field: &ParticleField,
    renderer: &mut impl SceneRenderer,
) -> Vec<PointHandle> {
    field
        .spheres
        .iter()
        .map(|sphere| renderer.register_point(sphere.position))
        .collect()
}

// One frame of the animation: step the field, rebuild the proximity graph
// from the new positions, then push the results to the renderer. The segment
// set is handed over in a single call, never piecemeal.
pub fn advance_frame(
    field: &mut ParticleField,
    graph: &mut ProximityGraph,
    renderer: &mut impl SceneRenderer,
    handles: &[PointHandle],
) {
    field.step();

    for (sphere, &handle) in field.spheres.iter().zip(handles) {
        renderer.update_point(handle, sphere.position, sphere.rotation);
    }

    let segments: Vec<(PointHandle, PointHandle)> = graph
        .rebuild(&field.spheres)
        .iter()
        .map(|edge| (handles[edge.a], handles[edge.b]))
        .collect();
    renderer.set_line_segments(&segments);
}
