/*
 * Renderer Module
 *
 * This module draws the point cloud. The animation core pushes its per-frame
 * output into a SceneBuffer through the SceneRenderer trait; the nannou view
 * then projects that buffered state through the orbiting camera and draws the
 * connecting lines and the depth-sorted spheres.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::camera::Projected;
use crate::scene::{PointHandle, SceneRenderer};
use crate::ui;
use crate::{LINE_WEIGHT, MIN_SPHERE_PIXELS};

// Buffered transform state for one registered point visual
#[derive(Clone, Copy)]
pub struct PointVisual {
    pub position: Vec3,
    pub rotation: Vec2,
}

// Scene state the view draws from. The core replaces its contents every
// frame; the buffer never carries segments over from a previous frame.
pub struct SceneBuffer {
    points: Vec<PointVisual>,
    segments: Vec<(PointHandle, PointHandle)>,
}

impl SceneBuffer {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            segments: Vec::new(),
        }
    }

    pub fn points(&self) -> &[PointVisual] {
        &self.points
    }

    pub fn segments(&self) -> &[(PointHandle, PointHandle)] {
        &self.segments
    }
}

impl Default for SceneBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneRenderer for SceneBuffer {
    fn register_point(&mut self, position: Vec3) -> PointHandle {
        self.points.push(PointVisual {
            position,
            rotation: Vec2::ZERO,
        });
        PointHandle::new(self.points.len() - 1)
    }

    fn update_point(&mut self, handle: PointHandle, position: Vec3, rotation: Vec2) {
        self.points[handle.index()] = PointVisual { position, rotation };
    }

    fn set_line_segments(&mut self, segments: &[(PointHandle, PointHandle)]) {
        self.segments.clear();
        self.segments.extend_from_slice(segments);
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();

    // Clear the background
    draw.background().color(BLACK);

    // Get the window rectangle and the camera transform for this instant
    let window_rect = app.window_rect();
    let camera_frame = model
        .camera
        .frame_transform(app.time * 1000.0, window_rect);

    let line_color = rgba(
        model.params.line_color.red as f32 / 255.0,
        model.params.line_color.green as f32 / 255.0,
        model.params.line_color.blue as f32 / 255.0,
        model.params.line_alpha,
    );

    // Draw the connecting lines first so the spheres sit on top of them
    for &(start, end) in model.scene.segments() {
        let start_pos = model.scene.points()[start.index()].position;
        let end_pos = model.scene.points()[end.index()].position;

        if let (Some(a), Some(b)) = (
            camera_frame.world_to_screen(start_pos),
            camera_frame.world_to_screen(end_pos),
        ) {
            draw.line()
                .start(a.screen)
                .end(b.screen)
                .weight(LINE_WEIGHT)
                .color(line_color);
        }
    }

    // Project every sphere, dropping any behind the camera
    let mut projected: Vec<(Projected, Vec2, Rgb<u8>)> = model
        .scene
        .points()
        .iter()
        .zip(&model.field.spheres)
        .filter_map(|(visual, sphere)| {
            camera_frame
                .world_to_screen(visual.position)
                .map(|p| (p, visual.rotation, sphere.color))
        })
        .collect();

    // Painter's algorithm: far spheres first
    projected.sort_by(|a, b| b.0.depth.total_cmp(&a.0.depth));

    for (point, rotation, color) in projected {
        let radius = (model.params.sphere_radius * point.scale).max(MIN_SPHERE_PIXELS);

        draw.ellipse()
            .xy(point.screen)
            .radius(radius)
            .color(color);

        // Hint the spin with a wandering specular highlight
        let highlight_offset = vec2(rotation.y.cos(), rotation.x.sin()) * radius * 0.35;
        draw.ellipse()
            .xy(point.screen + highlight_offset)
            .radius(radius * 0.3)
            .color(rgba(1.0, 1.0, 1.0, 0.35));
    }

    // Draw debug info
    if model.params.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, window_rect);
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}
