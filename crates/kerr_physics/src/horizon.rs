use kerr_core::GravityMode;

use super::lattice::linspace;

/// Outcome of evaluating the Kerr horizon formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HorizonRadius {
    /// r+ = M + sqrt(M^2 - a^2)
    Exact(f64),
    /// a > M: no horizon exists. The radius is substituted with M so rendering
    /// can carry on; it is not a physical value.
    NakedSingularityFallback { radius: f64, discriminant: f64 },
}

impl HorizonRadius {
    pub fn value(&self) -> f64 {
        match *self {
            Self::Exact(r) => r,
            Self::NakedSingularityFallback { radius, .. } => radius,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::NakedSingularityFallback { .. })
    }
}

/// Outer event horizon of a Kerr black hole
pub fn kerr_outer_horizon(mass: f64, spin: f64) -> HorizonRadius {
    let discriminant = mass * mass - spin * spin;
    if discriminant >= 0.0 {
        HorizonRadius::Exact(mass + discriminant.sqrt())
    } else {
        HorizonRadius::NakedSingularityFallback {
            radius: mass,
            discriminant,
        }
    }
}

/// Horizon surface appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizonStyle {
    pub color: [f32; 4],
    pub alpha: f32,
}

impl HorizonStyle {
    pub fn for_mode(mode: GravityMode) -> Self {
        match mode {
            // Opaque black disc that hides the disk behind it
            GravityMode::Relativistic => Self {
                color: [0.0, 0.0, 0.0, 1.0],
                alpha: 0.95,
            },
            GravityMode::Newtonian => Self {
                color: [0.5, 0.5, 0.5, 1.0],
                alpha: 0.5,
            },
        }
    }
}

/// Event-horizon sphere. Only rebuilt when mass, spin or mode change.
///
/// The surface is sampled on a square latitude x longitude lattice, row-major
/// with one row per longitude.
#[derive(Debug, Clone)]
pub struct HorizonGeometry {
    samples: usize,
    radius: HorizonRadius,
    style: HorizonStyle,
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
    /// Bumped on every recompute so consumers can rebuild lazily
    revision: u32,
}

impl HorizonGeometry {
    pub fn new(samples: usize, mass: f64, spin: f64, mode: GravityMode) -> Self {
        let mut geometry = Self {
            samples,
            radius: HorizonRadius::Exact(0.0),
            style: HorizonStyle::for_mode(mode),
            x: Vec::with_capacity(samples * samples),
            y: Vec::with_capacity(samples * samples),
            z: Vec::with_capacity(samples * samples),
            revision: 0,
        };
        geometry.recompute(mass, spin, mode);
        geometry
    }

    pub fn recompute(&mut self, mass: f64, spin: f64, mode: GravityMode) -> HorizonRadius {
        self.radius = kerr_outer_horizon(mass, spin);
        self.style = HorizonStyle::for_mode(mode);

        let r = self.radius.value();
        let theta = linspace(0.0, std::f64::consts::PI, self.samples);
        let phi = linspace(0.0, std::f64::consts::TAU, self.samples);

        self.x.clear();
        self.y.clear();
        self.z.clear();
        for &p in &phi {
            for &t in &theta {
                self.x.push(r * t.sin() * p.cos());
                self.y.push(r * t.sin() * p.sin());
                self.z.push(r * t.cos());
            }
        }

        self.revision = self.revision.wrapping_add(1);
        self.radius
    }

    pub fn radius(&self) -> HorizonRadius {
        self.radius
    }

    /// Outer horizon radius as rendered (M on fallback)
    pub fn radius_plus(&self) -> f64 {
        self.radius.value()
    }

    pub fn style(&self) -> HorizonStyle {
        self.style
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn z(&self) -> &[f64] {
        &self.z
    }

    pub fn revision(&self) -> u32 {
        self.revision
    }
}
