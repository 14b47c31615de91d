/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It provides controls for adjusting animation parameters.
 * Parameter change detection is handled by the SimulationParams struct.
 */

use nannou::prelude::*;
use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;

// Update the UI and return whether the field should be reset, whether the
// point count changed, and whether any parameter changed at all
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
) -> (bool, bool, bool) {
    let mut should_reset = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Animation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Point Cloud", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.num_points, SimulationParams::get_num_points_range())
                        .text("Number of Spheres"),
                );
                ui.add(
                    egui::Slider::new(&mut params.spawn_extent, SimulationParams::get_spawn_extent_range())
                        .text("Spawn Cube Size"),
                );
                ui.add(
                    egui::Slider::new(&mut params.velocity_scale, SimulationParams::get_velocity_scale_range())
                        .text("Drift Speed"),
                );

                if ui.button("Reset Field").clicked() {
                    should_reset = true;
                }
            });

            ui.collapsing("Connections", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.link_threshold, SimulationParams::get_link_threshold_range())
                        .text("Link Distance"),
                );
                ui.checkbox(&mut params.enable_spatial_grid, "Enable Spatial Grid");
            });

            ui.collapsing("Motion", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.bound, SimulationParams::get_bound_range())
                        .text("Wall Distance"),
                );
                ui.add(
                    egui::Slider::new(&mut params.rotation_increment, SimulationParams::get_rotation_increment_range())
                        .text("Spin Rate"),
                );
            });

            ui.collapsing("Camera", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.orbit_radius, SimulationParams::get_orbit_radius_range())
                        .text("Orbit Radius"),
                );
                ui.add(
                    egui::Slider::new(&mut params.orbit_speed, SimulationParams::get_orbit_speed_range())
                        .text("Orbit Speed"),
                );
            });

            ui.checkbox(&mut params.pause_animation, "Pause Animation");
            ui.checkbox(&mut params.show_debug, "Show Debug Info");
        });

    // Detect changes made by the sliders this frame
    let (num_points_changed, ui_changed) = params.detect_changes();

    (should_reset, num_points_changed, ui_changed)
}

// Draw the debug overlay in the top-left corner of the window
pub fn draw_debug_info(draw: &Draw, debug_info: &DebugInfo, window_rect: Rect) {
    let x = window_rect.left() + 100.0;
    let top = window_rect.top();

    draw.text(&format!("FPS: {:.1}", debug_info.fps))
        .x_y(x, top - 20.0)
        .color(WHITE)
        .font_size(14);

    draw.text(&format!(
        "Frame time: {:.2} ms",
        debug_info.frame_time.as_secs_f64() * 1000.0
    ))
    .x_y(x, top - 40.0)
    .color(WHITE)
    .font_size(14);

    draw.text(&format!("Spheres: {}", debug_info.sphere_count))
        .x_y(x, top - 60.0)
        .color(WHITE)
        .font_size(14);

    draw.text(&format!("Links: {}", debug_info.link_count))
        .x_y(x, top - 80.0)
        .color(WHITE)
        .font_size(14);
}
