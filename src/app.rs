/*
 * Application Module
 *
 * This module defines the main application model and logic for the
 * point-cloud animation. It handles initialization and the per-frame update
 * cycle: control panel, parameter changes, then one step of the field
 * followed by a full proximity-graph rebuild pushed into the scene buffer.
 */

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::camera::OrbitCamera;
use crate::debug::DebugInfo;
use crate::field::ParticleField;
use crate::proximity::ProximityGraph;
use crate::renderer::{view, SceneBuffer};
use crate::scene::{self, PointHandle};
use crate::params::SimulationParams;
use crate::ui;

// Main model for the application
pub struct Model {
    pub field: ParticleField,
    pub graph: ProximityGraph,
    pub camera: OrbitCamera,
    pub scene: SceneBuffer,
    pub handles: Vec<PointHandle>,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Get the primary monitor's dimensions
    let monitor = app.primary_monitor().expect("Failed to get primary monitor");
    let monitor_size = monitor.size();

    // Calculate window size based on monitor size (80% of monitor size)
    let window_width = monitor_size.width as f32 * 0.8;
    let window_height = monitor_size.height as f32 * 0.8;

    // Create the main window with dynamic size
    let window_id = app
        .new_window()
        .title("Plexus Point Cloud")
        .size(window_width as u32, window_height as u32)
        .view(view)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    // Get the window
    let window = app.window(window_id).unwrap();

    // Create the UI
    let egui = Egui::from_window(&window);

    // Create animation parameters
    let params = SimulationParams::default();

    // Create the field, the proximity graph, and the orbiting camera
    let field = ParticleField::new(&params);
    let graph = ProximityGraph::new(&params);
    let camera = OrbitCamera::new(params.orbit_radius, params.orbit_speed);

    // Register one point visual per sphere with the scene buffer
    let mut scene = SceneBuffer::new();
    let handles = scene::register_field(&field, &mut scene);

    Model {
        field,
        graph,
        camera,
        scene,
        handles,
        params,
        egui,
        debug_info: DebugInfo::default(),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.debug_info.sphere_count = model.field.len();

    // Update UI and check if the field needs to be rebuilt
    let (should_reset, num_points_changed, ui_changed) =
        ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    // Propagate parameter changes into the components
    if ui_changed {
        model.field.configure(&model.params);
        model.graph.configure(&model.params);
        model.camera.radius = model.params.orbit_radius;
        model.camera.angular_velocity = model.params.orbit_speed;
    }

    // Handle reset: re-randomize the field and re-register its visuals
    if should_reset || num_points_changed {
        model.field.reset(&model.params);
        model.scene = SceneBuffer::new();
        model.handles = scene::register_field(&model.field, &mut model.scene);
    }

    // Advance the animation by one frame unless paused
    if !model.params.pause_animation {
        scene::advance_frame(
            &mut model.field,
            &mut model.graph,
            &mut model.scene,
            &model.handles,
        );
        model.debug_info.link_count = model.scene.segments().len();
    }
}

// Handle raw window events for egui
fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
