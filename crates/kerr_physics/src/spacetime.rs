use kerr_core::constants::{GRID_INNER_RADIUS, GRID_OUTER_RADIUS};
use kerr_core::{GravityMode, LabConfig};

use super::forces;
use super::lattice::linspace;

/// Wireframe appearance, one per gravity mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridStyle {
    pub hex: &'static str,
    pub color: [f32; 4],
    pub alpha: f32,
    pub line_width: f32,
}

impl GridStyle {
    pub fn for_mode(mode: GravityMode) -> Self {
        match mode {
            GravityMode::Relativistic => Self {
                hex: "#00ffff",
                color: [0.0, 1.0, 1.0, 1.0],
                alpha: 0.3,
                line_width: 0.6,
            },
            GravityMode::Newtonian => Self {
                hex: "#444444",
                color: [0.267, 0.267, 0.267, 1.0],
                alpha: 0.3,
                line_width: 0.6,
            },
        }
    }
}

/// Deformable polar mesh: azimuthal twist shows frame dragging,
/// the vertical funnel shows curvature.
///
/// Arrays are row-major with one row per azimuth sample and one column per
/// radius sample (rows x cols = 25 x 15 by default).
#[derive(Debug, Clone)]
pub struct SpacetimeGrid {
    rows: usize,
    cols: usize,
    /// Radius of each column, fixed
    radius: Vec<f64>,
    /// Twisted azimuth of every mesh point. Accumulates forever, never re-based.
    azimuth: Vec<f64>,
    /// Funnel depth of every mesh point, recomputed from scratch each tick
    height: Vec<f64>,
    x: Vec<f64>,
    y: Vec<f64>,
    style: GridStyle,
    drag_strength: f64,
    drag_power: f64,
}

impl SpacetimeGrid {
    pub fn new(config: &LabConfig, mass: f64, mode: GravityMode) -> Self {
        let radius = linspace(GRID_INNER_RADIUS, GRID_OUTER_RADIUS, config.grid_radial_samples);
        let phi = linspace(0.0, std::f64::consts::TAU, config.grid_azimuth_samples);
        let rows = phi.len();
        let cols = radius.len();

        let mut azimuth = Vec::with_capacity(rows * cols);
        for &p in &phi {
            azimuth.extend(std::iter::repeat_n(p, cols));
        }

        let mut grid = Self {
            rows,
            cols,
            radius,
            azimuth,
            height: vec![0.0; rows * cols],
            x: vec![0.0; rows * cols],
            y: vec![0.0; rows * cols],
            style: GridStyle::for_mode(mode),
            drag_strength: config.drag_strength,
            drag_power: config.drag_power,
        };
        grid.reshape(mass, mode);
        grid
    }

    /// One tick: twist (relativistic only), then rebuild depth and Cartesian mesh.
    /// In Newtonian mode the twist stays frozen where it was.
    pub fn advance(&mut self, mass: f64, spin: f64, mode: GravityMode) {
        if mode == GravityMode::Relativistic {
            for row in self.azimuth.chunks_mut(self.cols) {
                for (phi, &r) in row.iter_mut().zip(&self.radius) {
                    *phi += forces::frame_drag(spin, r, self.drag_strength, self.drag_power);
                }
            }
        }
        self.reshape(mass, mode);
    }

    /// Rebuild depth, Cartesian mesh and style for the current twist without advancing it
    pub fn reshape(&mut self, mass: f64, mode: GravityMode) {
        for i in 0..self.azimuth.len() {
            let r = self.radius[i % self.cols];
            let phi = self.azimuth[i];
            self.height[i] = forces::funnel_depth(r, mass, mode);
            self.x[i] = r * phi.cos();
            self.y[i] = r * phi.sin();
        }
        self.style = GridStyle::for_mode(mode);
    }

    /// Mesh point (x, y, z) at azimuth row `row`, radius column `col`
    pub fn point(&self, row: usize, col: usize) -> [f64; 3] {
        let i = row * self.cols + col;
        [self.x[i], self.y[i], self.height[i]]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn radius(&self) -> &[f64] {
        &self.radius
    }

    pub fn azimuth(&self) -> &[f64] {
        &self.azimuth
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn z(&self) -> &[f64] {
        &self.height
    }

    pub fn style(&self) -> GridStyle {
        self.style
    }
}
