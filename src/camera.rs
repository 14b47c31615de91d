/*
 * Camera Module
 *
 * This module defines the OrbitCamera that circles the point cloud. The eye
 * position is a stateless function of elapsed wall-clock time: a fixed-radius
 * circle in the XZ plane, always looking at the origin. It also provides the
 * perspective transform from world space to screen space used by the renderer.
 */

use nannou::prelude::*;

pub struct OrbitCamera {
    pub radius: f32,
    pub angular_velocity: f32, // radians per millisecond
    pub fov_y: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl OrbitCamera {
    pub fn new(radius: f32, angular_velocity: f32) -> Self {
        Self {
            radius,
            angular_velocity,
            fov_y: 75.0_f32.to_radians(),
            z_near: 0.1,
            z_far: 1000.0,
        }
    }

    // Eye position on the orbit circle at the given elapsed time
    pub fn eye(&self, elapsed_ms: f32) -> Vec3 {
        let angle = elapsed_ms * self.angular_velocity;
        vec3(self.radius * angle.cos(), 0.0, self.radius * angle.sin())
    }

    // Build the per-frame transform for the current time and window
    pub fn frame_transform(&self, elapsed_ms: f32, window_rect: Rect) -> CameraFrame {
        let aspect = window_rect.w() / window_rect.h();
        let view = Mat4::look_at_rh(self.eye(elapsed_ms), Vec3::ZERO, Vec3::Y);
        let projection = Mat4::perspective_rh_gl(self.fov_y, aspect, self.z_near, self.z_far);

        // Pixels per world unit at unit depth, for sizing projected spheres
        let focal_px = (window_rect.h() * 0.5) / (self.fov_y * 0.5).tan();

        CameraFrame {
            view_projection: projection * view,
            half_size: vec2(window_rect.w() * 0.5, window_rect.h() * 0.5),
            focal_px,
            z_near: self.z_near,
        }
    }
}

// Snapshot of the camera transform for one frame
pub struct CameraFrame {
    view_projection: Mat4,
    half_size: Vec2,
    focal_px: f32,
    z_near: f32,
}

// A world point mapped onto the screen
#[derive(Clone, Copy, Debug)]
pub struct Projected {
    pub screen: Vec2,
    pub depth: f32,
    pub scale: f32, // pixels per world unit at this depth
}

impl CameraFrame {
    // Convert a point from world space to screen space. Points at or behind
    // the near plane are not drawable and map to None.
    pub fn world_to_screen(&self, point: Vec3) -> Option<Projected> {
        let clip = self.view_projection * point.extend(1.0);
        if clip.w <= self.z_near {
            return None;
        }

        let ndc = clip / clip.w;
        Some(Projected {
            screen: vec2(ndc.x * self.half_size.x, ndc.y * self.half_size.y),
            depth: clip.w,
            scale: self.focal_px / clip.w,
        })
    }
}
