/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the point-cloud animation. These parameters can
 * be modified through the UI. It also provides methods for parameter change
 * detection and management to improve separation of concerns.
 */

use nannou::prelude::*;

// Parameters for the animation that can be adjusted via UI
pub struct SimulationParams {
    pub num_points: usize,
    pub spawn_extent: f32,       // side length of the initial spawn cube
    pub velocity_scale: f32,     // width of the per-axis velocity range
    pub link_threshold: f32,     // max distance at which two spheres connect
    pub bound: f32,              // half-extent of the reflection cube
    pub rotation_increment: f32, // per-frame spin added to each rotation angle
    pub orbit_radius: f32,
    pub orbit_speed: f32, // radians per millisecond
    pub sphere_radius: f32,
    pub palette: [Rgb<u8>; 3],
    pub line_color: Rgb<u8>,
    pub line_alpha: f32,
    pub seed: Option<u64>, // fixed seed for reproducible runs
    pub show_debug: bool,
    pub pause_animation: bool,
    pub enable_spatial_grid: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
struct ParamSnapshot {
    num_points: usize,
    spawn_extent: f32,
    velocity_scale: f32,
    link_threshold: f32,
    bound: f32,
    rotation_increment: f32,
    orbit_radius: f32,
    orbit_speed: f32,
    show_debug: bool,
    pause_animation: bool,
    enable_spatial_grid: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_points: 15,
            spawn_extent: 40.0,
            velocity_scale: 0.1,
            link_threshold: 15.0,
            bound: 20.0,
            rotation_increment: 0.01,
            orbit_radius: 30.0,
            orbit_speed: 0.0005,
            sphere_radius: 1.0,
            // Green, blue, light green
            palette: [rgb(76, 175, 80), rgb(33, 150, 243), rgb(139, 195, 74)],
            line_color: rgb(76, 175, 80),
            line_alpha: 0.3,
            seed: None,
            show_debug: false,
            pause_animation: false,
            enable_spatial_grid: false,
            // Initialize with no previous values
            previous_values: None,
        }
    }
}

impl SimulationParams {
    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            num_points: self.num_points,
            spawn_extent: self.spawn_extent,
            velocity_scale: self.velocity_scale,
            link_threshold: self.link_threshold,
            bound: self.bound,
            rotation_increment: self.rotation_increment,
            orbit_radius: self.orbit_radius,
            orbit_speed: self.orbit_speed,
            show_debug: self.show_debug,
            pause_animation: self.pause_animation,
            enable_spatial_grid: self.enable_spatial_grid,
        });
    }

    // Check if any parameters have changed since the last snapshot.
    // Returns a tuple of (num_points_changed, any_ui_changed)
    pub fn detect_changes(&self) -> (bool, bool) {
        let mut num_points_changed = false;
        let mut ui_changed = false;

        // If we don't have previous values, nothing has changed
        if let Some(prev) = &self.previous_values {
            if self.num_points != prev.num_points {
                num_points_changed = true;
                ui_changed = true;
            }

            if self.spawn_extent != prev.spawn_extent
                || self.velocity_scale != prev.velocity_scale
                || self.link_threshold != prev.link_threshold
                || self.bound != prev.bound
                || self.rotation_increment != prev.rotation_increment
                || self.orbit_radius != prev.orbit_radius
                || self.orbit_speed != prev.orbit_speed
                || self.show_debug != prev.show_debug
                || self.pause_animation != prev.pause_animation
                || self.enable_spatial_grid != prev.enable_spatial_grid
            {
                ui_changed = true;
            }
        }

        (num_points_changed, ui_changed)
    }

    // Get parameter ranges for UI sliders
    pub fn get_num_points_range() -> std::ops::RangeInclusive<usize> {
        2..=500
    }

    pub fn get_spawn_extent_range() -> std::ops::RangeInclusive<f32> {
        10.0..=80.0
    }

    pub fn get_velocity_scale_range() -> std::ops::RangeInclusive<f32> {
        0.01..=0.5
    }

    pub fn get_link_threshold_range() -> std::ops::RangeInclusive<f32> {
        1.0..=40.0
    }

    pub fn get_bound_range() -> std::ops::RangeInclusive<f32> {
        5.0..=50.0
    }

    pub fn get_rotation_increment_range() -> std::ops::RangeInclusive<f32> {
        0.0..=0.05
    }

    pub fn get_orbit_radius_range() -> std::ops::RangeInclusive<f32> {
        10.0..=80.0
    }

    pub fn get_orbit_speed_range() -> std::ops::RangeInclusive<f32> {
        0.0..=0.002
    }
}
