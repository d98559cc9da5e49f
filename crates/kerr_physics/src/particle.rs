use kerr_core::colormap;
use kerr_core::constants::{DISK_HEIGHT_STDDEV, DISK_INNER_RADIUS, DISK_OUTER_RADIUS};
use kerr_core::LabConfig;
use rand::Rng;
use rand_distr::StandardNormal;

use super::forces;

/// Accretion disk stored as parallel arrays (one slot per particle).
///
/// Orbits are circles at a fixed radius: only `azimuth` changes per tick.
/// Azimuth is never wrapped, downstream code only takes its sin/cos.
#[derive(Debug, Clone)]
pub struct ParticleField {
    radius: Vec<f64>,
    azimuth: Vec<f64>,
    height: Vec<f64>,
    /// Plasma color by normalized inverse radius, fixed at creation
    colors: Vec<[f32; 4]>,
    /// Cartesian (x, y, z) for the renderer, refreshed on every advance
    positions: Vec<[f32; 3]>,
    speed_multiplier: f64,
}

impl ParticleField {
    /// Sample the initial disk: r ~ U(1.5, 6), phi ~ U(0, 2pi), z ~ N(0, 0.04)
    pub fn generate(config: &LabConfig, rng: &mut impl Rng) -> Self {
        let n = config.particle_count;
        let mut radius = Vec::with_capacity(n);
        let mut azimuth = Vec::with_capacity(n);
        let mut height = Vec::with_capacity(n);

        for _ in 0..n {
            radius.push(rng.gen_range(DISK_INNER_RADIUS..DISK_OUTER_RADIUS));
            azimuth.push(rng.gen_range(0.0..std::f64::consts::TAU));
            let z: f64 = rng.sample(StandardNormal);
            height.push(z * DISK_HEIGHT_STDDEV);
        }

        Self::from_polar(radius, azimuth, height, config.speed_multiplier)
    }

    /// Build a field from explicit coordinates. Arrays are truncated to the shortest.
    pub fn from_polar(
        mut radius: Vec<f64>,
        mut azimuth: Vec<f64>,
        mut height: Vec<f64>,
        speed_multiplier: f64,
    ) -> Self {
        let n = radius.len().min(azimuth.len()).min(height.len());
        radius.truncate(n);
        azimuth.truncate(n);
        height.truncate(n);

        let colors = radius.iter().map(|&r| disk_color(r)).collect();

        let mut field = Self {
            radius,
            azimuth,
            height,
            colors,
            positions: vec![[0.0; 3]; n],
            speed_multiplier,
        };
        field.refresh_positions();
        field
    }

    /// Advance every orbit by one tick at the given black hole mass
    pub fn advance(&mut self, mass: f64) {
        let k = self.speed_multiplier;
        for (phi, &r) in self.azimuth.iter_mut().zip(&self.radius) {
            *phi += forces::angular_velocity(mass, r) * k;
        }
        self.refresh_positions();
    }

    fn refresh_positions(&mut self) {
        for (i, pos) in self.positions.iter_mut().enumerate() {
            let (r, phi) = (self.radius[i], self.azimuth[i]);
            *pos = [
                (r * phi.cos()) as f32,
                (r * phi.sin()) as f32,
                self.height[i] as f32,
            ];
        }
    }

    pub fn len(&self) -> usize {
        self.radius.len()
    }

    pub fn radius(&self) -> &[f64] {
        &self.radius
    }

    pub fn azimuth(&self) -> &[f64] {
        &self.azimuth
    }

    pub fn height(&self) -> &[f64] {
        &self.height
    }

    pub fn colors(&self) -> &[[f32; 4]] {
        &self.colors
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Positions as a flat N*3 buffer (x0, y0, z0, x1, ...)
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }
}

/// Inner edge maps to the hot end of the gradient, outer edge to the cool end
fn disk_color(radius: f64) -> [f32; 4] {
    let norm = (radius - DISK_INNER_RADIUS) / (DISK_OUTER_RADIUS - DISK_INNER_RADIUS);
    colormap::plasma(1.0 - norm)
}
