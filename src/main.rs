use std::time::Duration;

use bevy::prelude::*;
use kerr_core::LabConfig;
use kerr_render::KerrRenderPlugin;
use kerr_sim::{LabState, SimulationPlugin};

fn main() {
    let config = LabConfig::default();
    let tick_period = Duration::from_millis(config.tick_period_ms);

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "KERR LAB v2.0: GENERAL RELATIVITY".into(),
                resolution: (1400.0, 1000.0).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(LabState::new(config))
        .add_plugins(SimulationPlugin { tick_period })
        .add_plugins(KerrRenderPlugin)
        .add_systems(PostStartup, announce_ready)
        .run();
}

fn announce_ready() {
    info!("[+] KERR LAB v2.0 READY.");
}
