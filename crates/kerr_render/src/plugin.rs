use bevy::prelude::*;

use super::camera;
use super::grid;
use super::horizon;
use super::particles;
use super::ui;

/// Main render plugin for the Kerr lab
pub struct KerrRenderPlugin;

impl Plugin for KerrRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                camera::spawn_camera,
                ui::spawn_hud,
                particles::spawn_particle_visuals,
                horizon::spawn_horizon,
                grid::configure_grid_gizmos,
            ),
        )
        .add_systems(
            Update,
            (
                camera::orbit_camera_system,
                ui::lab_control_system,
                particles::update_particle_visuals.after(ui::lab_control_system),
                horizon::update_horizon.after(ui::lab_control_system),
                grid::draw_spacetime_grid.after(ui::lab_control_system),
                ui::update_hud.after(ui::lab_control_system),
            ),
        );
    }
}
