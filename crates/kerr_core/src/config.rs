use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Lab configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabConfig {
    /// Number of accretion-disk particles
    pub particle_count: usize,
    /// Random seed for deterministic disk sampling
    pub seed: u64,
    /// Orbital speed multiplier applied per tick
    pub speed_multiplier: f64,
    /// Frame-dragging strength
    pub drag_strength: f64,
    /// Frame-dragging falloff power
    pub drag_power: f64,
    /// Grid radial samples
    pub grid_radial_samples: usize,
    /// Grid azimuthal samples
    pub grid_azimuth_samples: usize,
    /// Horizon sphere samples per axis
    pub sphere_samples: usize,
    /// Tick period in milliseconds
    pub tick_period_ms: u64,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            seed: 42,
            speed_multiplier: SPEED_MULTIPLIER,
            drag_strength: DRAG_STRENGTH,
            drag_power: DRAG_POWER,
            grid_radial_samples: GRID_RADIAL_SAMPLES,
            grid_azimuth_samples: GRID_AZIMUTH_SAMPLES,
            sphere_samples: SPHERE_SAMPLES,
            tick_period_ms: TICK_PERIOD_MS,
        }
    }
}
