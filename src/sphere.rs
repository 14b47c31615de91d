/*
 * Sphere Module
 *
 * This module defines the Sphere struct, the individual drifting point of the
 * cloud. Each sphere carries a position, a velocity, a pair of cosmetic
 * rotation angles, and a material color picked from the configured palette.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::params::SimulationParams;

#[derive(Clone)]
pub struct Sphere {
    pub position: Vec3,
    pub velocity: Vec3,
    pub rotation: Vec2,
    pub color: Rgb<u8>,
}

impl Sphere {
    pub fn new(rng: &mut impl Rng, params: &SimulationParams) -> Self {
        // Random position inside the spawn cube
        let position = vec3(
            (rng.gen::<f32>() - 0.5) * params.spawn_extent,
            (rng.gen::<f32>() - 0.5) * params.spawn_extent,
            (rng.gen::<f32>() - 0.5) * params.spawn_extent,
        );

        // Random drift velocity, one fixed step per frame
        let velocity = vec3(
            (rng.gen::<f32>() - 0.5) * params.velocity_scale,
            (rng.gen::<f32>() - 0.5) * params.velocity_scale,
            (rng.gen::<f32>() - 0.5) * params.velocity_scale,
        );

        let color = params.palette[rng.gen_range(0..params.palette.len())];

        Self {
            position,
            velocity,
            rotation: Vec2::ZERO,
            color,
        }
    }

    // Advance the sphere by one frame step
    pub fn advance(&mut self, rotation_increment: f32) {
        // Update position (step size is implicitly one frame)
        self.position += self.velocity;

        // Spin in place, purely visual
        self.rotation.x += rotation_increment;
        self.rotation.y += rotation_increment;
    }

    // Reflect off the invisible walls of the bounding cube.
    // The velocity flips on every step the sphere spends outside the bound,
    // not just once on crossing, so a sphere lingers in a short bounce
    // near the wall before drifting back in.
    pub fn bounce_walls(&mut self, bound: f32) {
        if self.position.x.abs() > bound {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y.abs() > bound {
            self.velocity.y = -self.velocity.y;
        }
        if self.position.z.abs() > bound {
            self.velocity.z = -self.velocity.z;
        }
    }
}
