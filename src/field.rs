/*
 * Particle Field Module
 *
 * This module owns the set of drifting spheres and advances their state by
 * exactly one discrete time step per call. Stepping never fails and has no
 * side effects beyond mutating the spheres in place.
 */

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::params::SimulationParams;
use crate::sphere::Sphere;

pub struct ParticleField {
    pub spheres: Vec<Sphere>,
    bound: f32,
    rotation_increment: f32,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(params: &SimulationParams) -> Self {
        // A fixed seed makes the whole run reproducible; otherwise seed from entropy
        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let spheres = (0..params.num_points)
            .map(|_| Sphere::new(&mut rng, params))
            .collect();

        Self {
            spheres,
            bound: params.bound,
            rotation_increment: params.rotation_increment,
            rng,
        }
    }

    // Advance every sphere by one frame step and reflect off the walls
    pub fn step(&mut self) {
        for sphere in &mut self.spheres {
            sphere.advance(self.rotation_increment);
            sphere.bounce_walls(self.bound);
        }
    }

    // Re-randomize the field from the current parameters
    pub fn reset(&mut self, params: &SimulationParams) {
        self.configure(params);
        self.spheres.clear();
        for _ in 0..params.num_points {
            let sphere = Sphere::new(&mut self.rng, params);
            self.spheres.push(sphere);
        }
    }

    // Pick up parameter changes that affect stepping
    pub fn configure(&mut self, params: &SimulationParams) {
        self.bound = params.bound;
        self.rotation_increment = params.rotation_increment;
    }

    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}
