use std::time::Duration;

use bevy::prelude::*;

use super::lab::LabState;

/// Bevy plugin for the simulation pipeline: advances the lab on a fixed cadence
/// (`LabConfig::tick_period_ms`)
pub struct SimulationPlugin {
    pub tick_period: Duration,
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_duration(self.tick_period))
            .add_systems(FixedUpdate, simulation_tick);
    }
}

/// Main simulation tick: one orbital step for the disk, one twist for the grid
fn simulation_tick(mut lab: ResMut<LabState>) {
    lab.advance();
}
