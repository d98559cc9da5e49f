// Tuning constants for the visualization
// Units are geometrized (G = c = 1): mass, spin and radius share one length scale.
// None of these come from real Kerr geodesics; they are picked to read well on screen.

/// Number of accretion-disk particles
pub const PARTICLE_COUNT: usize = 800;

/// Inner edge of the accretion disk
pub const DISK_INNER_RADIUS: f64 = 1.5;

/// Outer edge of the accretion disk
pub const DISK_OUTER_RADIUS: f64 = 6.0;

/// Standard deviation of disk thickness around the equatorial plane
pub const DISK_HEIGHT_STDDEV: f64 = 0.04;

/// Prefactor of the Keplerian-like angular velocity law (omega = K * M * r^-1.5)
pub const ORBIT_COEFFICIENT: f64 = 1.5;

/// Orbital speed multiplier applied per tick
pub const SPEED_MULTIPLIER: f64 = 0.15;

/// How much space twists per tick
pub const DRAG_STRENGTH: f64 = 0.5;

/// Falloff power of frame dragging (1/r^2 approx)
pub const DRAG_POWER: f64 = 2.0;

/// Radial extent of the spacetime grid
pub const GRID_INNER_RADIUS: f64 = 1.1;
pub const GRID_OUTER_RADIUS: f64 = 9.0;

/// Grid resolution (reduced for render performance)
pub const GRID_RADIAL_SAMPLES: usize = 15;
pub const GRID_AZIMUTH_SAMPLES: usize = 25;

/// Vertical offset of the funnel below the disk plane
pub const FUNNEL_BASE_DEPTH: f64 = -7.0;

/// Mass coupling of the relativistic funnel depth
pub const FUNNEL_MASS_COUPLING: f64 = 3.0;

/// Horizon sphere resolution (latitude x longitude)
pub const SPHERE_SAMPLES: usize = 25;

/// Driver cadence in milliseconds (~33 ticks per second)
pub const TICK_PERIOD_MS: u64 = 30;
