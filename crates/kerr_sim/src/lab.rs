use bevy::prelude::*;
use kerr_core::{GravityMode, HudPanel, InputOutcome, LabConfig, SimulationParameters};
use kerr_physics::{HorizonGeometry, HorizonRadius, ParticleField, SpacetimeGrid};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::hud::{self, HudLine};

/// Which input changed; fanned out by `LabState::on_parameter_changed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterChange {
    Mass,
    Spin,
    Mode,
}

/// Whole lab state, tracked as a Bevy Resource
///
/// Parameters are only mutated through the input methods below so every
/// change goes through the same notification path.
#[derive(Resource)]
pub struct LabState {
    params: SimulationParameters,
    particles: ParticleField,
    grid: SpacetimeGrid,
    horizon: HorizonGeometry,
    hud_panel: HudPanel,
    paused: bool,
    /// Ticks actually advanced (paused ticks not counted)
    ticks: u64,
    /// Bumped whenever HUD content may have changed
    hud_revision: u32,
}

impl LabState {
    pub fn new(config: LabConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let particles = ParticleField::generate(&config, &mut rng);
        Self::with_particles(config, particles)
    }

    pub fn with_particles(config: LabConfig, particles: ParticleField) -> Self {
        let params = SimulationParameters::default();
        let grid = SpacetimeGrid::new(&config, params.mass, params.mode);
        let horizon =
            HorizonGeometry::new(config.sphere_samples, params.mass, params.spin, params.mode);
        Self {
            params,
            particles,
            grid,
            horizon,
            hud_panel: HudPanel::Dashboard,
            paused: false,
            ticks: 0,
            hud_revision: 0,
        }
    }

    /// Advance the disk and the grid by one tick. No-op while paused.
    /// Returns whether anything moved.
    pub fn advance(&mut self) -> bool {
        if self.paused {
            return false;
        }

        let SimulationParameters { mass, spin, mode } = self.params;
        self.particles.advance(mass);
        self.grid.advance(mass, spin, mode);
        self.ticks += 1;
        true
    }

    pub fn set_mass(&mut self, mass: f64) {
        let outcome = self.params.set_mass(mass);
        self.apply_input(ParameterChange::Mass, outcome);
    }

    pub fn set_spin(&mut self, spin: f64) {
        let outcome = self.params.set_spin(spin);
        self.apply_input(ParameterChange::Spin, outcome);
    }

    fn apply_input(&mut self, change: ParameterChange, outcome: InputOutcome) {
        match outcome {
            InputOutcome::Applied(_) => {}
            InputOutcome::Clamped { requested, applied } => {
                debug!("{:?} input {} out of range, clamped to {}", change, requested, applied);
            }
            InputOutcome::Ignored => {
                debug!("{:?} input is not a finite number, ignored", change);
                return;
            }
        }
        self.on_parameter_changed(change);
    }

    pub fn toggle_newtonian(&mut self) -> GravityMode {
        let mode = self.params.toggle_mode();
        info!("Gravity mode: {}", mode.name());
        self.on_parameter_changed(ParameterChange::Mode);
        mode
    }

    pub fn toggle_paused(&mut self) -> bool {
        self.paused = !self.paused;
        info!("Simulation {}", if self.paused { "paused" } else { "resumed" });
        self.hud_revision = self.hud_revision.wrapping_add(1);
        self.paused
    }

    pub fn cycle_hud_panel(&mut self) -> HudPanel {
        self.hud_panel = self.hud_panel.next();
        info!("Info panel: {}", self.hud_panel.name());
        self.hud_revision = self.hud_revision.wrapping_add(1);
        self.hud_panel
    }

    /// Single fan-out for mass, spin and mode edits: rebuild the horizon,
    /// reshape the grid for the new parameters (twist untouched) and refresh the HUD.
    pub fn on_parameter_changed(&mut self, change: ParameterChange) {
        let SimulationParameters { mass, spin, mode } = self.params;

        let radius = self.horizon.recompute(mass, spin, mode);
        if let HorizonRadius::NakedSingularityFallback { radius, discriminant } = radius {
            warn!(
                "Naked-singularity fallback engaged after {:?} change: a={:.2} > M={:.1} \
                 (M^2 - a^2 = {:.4}), drawing horizon at r = M = {:.2}",
                change, spin, mass, discriminant, radius
            );
        }

        self.grid.reshape(mass, mode);
        self.hud_revision = self.hud_revision.wrapping_add(1);
    }

    /// HUD lines for the current panel, mode and parameters
    pub fn hud(&self) -> Vec<HudLine> {
        hud::compose(&self.params, self.hud_panel, self.paused, self.horizon.radius())
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn grid(&self) -> &SpacetimeGrid {
        &self.grid
    }

    pub fn horizon(&self) -> &HorizonGeometry {
        &self.horizon
    }

    pub fn hud_panel(&self) -> HudPanel {
        self.hud_panel
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn hud_revision(&self) -> u32 {
        self.hud_revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lab() -> LabState {
        LabState::new(LabConfig::default())
    }

    #[test]
    fn test_initial_state() {
        let lab = lab();
        assert_eq!(lab.hud_panel(), HudPanel::Dashboard);
        assert!(!lab.paused());
        assert!(!lab.params().is_newtonian());
        assert_eq!(lab.particles().len(), 800);
        // M = 1.0, a = 0.9
        assert!((lab.horizon().radius_plus() - (1.0 + 0.19f64.sqrt())).abs() < 1e-12);
    }

    #[test]
    fn test_paused_advance_is_a_no_op() {
        let mut lab = lab();
        lab.advance();
        lab.toggle_paused();

        let positions = lab.particles().positions().to_vec();
        let azimuth = lab.grid().azimuth().to_vec();
        for _ in 0..10 {
            assert!(!lab.advance());
        }
        assert_eq!(lab.particles().positions(), positions.as_slice());
        assert_eq!(lab.grid().azimuth(), azimuth.as_slice());
        assert_eq!(lab.ticks(), 1);
    }

    #[test]
    fn test_parameter_edits_apply_while_paused() {
        let mut lab = lab();
        lab.toggle_paused();
        let rev = lab.hud_revision();

        lab.set_spin(0.0);
        assert_eq!(lab.horizon().radius_plus(), 2.0);
        assert!(lab.hud_revision() != rev);
        assert!(lab.hud()[1].text.contains("a=0.00"));
    }

    #[test]
    fn test_mass_edit_while_paused_reshapes_grid_without_twist() {
        let mut lab = lab();
        lab.advance();
        lab.toggle_paused();
        let azimuth = lab.grid().azimuth().to_vec();
        let ticks = lab.ticks();

        lab.set_mass(2.0);
        assert!((lab.grid().point(0, 0)[2] - (-7.0 - 6.0 / 1.1)).abs() < 1e-12);
        assert_eq!(lab.grid().azimuth(), azimuth.as_slice());
        assert_eq!(lab.ticks(), ticks);
        assert_eq!(lab.grid().style().hex, "#00ffff");
    }

    #[test]
    fn test_naked_singularity_is_reported_not_raised() {
        let mut lab = lab();
        lab.set_spin(0.99);
        lab.set_mass(0.5);
        assert!(lab.horizon().radius().is_fallback());
        assert_eq!(lab.horizon().radius_plus(), 0.5);

        // Rendering keeps going
        assert!(lab.advance());

        lab.set_mass(1.0);
        assert!(!lab.horizon().radius().is_fallback());
    }

    #[test]
    fn test_out_of_range_mass_is_clamped() {
        let mut lab = lab();
        lab.set_mass(10.0);
        assert_eq!(lab.params().mass, 2.0);
        lab.set_mass(f64::NAN);
        assert_eq!(lab.params().mass, 2.0);
    }

    #[test]
    fn test_mode_toggle_freezes_grid_twist() {
        let mut reference = lab();
        for _ in 0..30 {
            reference.advance();
        }

        let mut lab = lab();
        for _ in 0..30 {
            lab.advance();
        }
        lab.toggle_newtonian();
        for _ in 0..12 {
            lab.advance();
        }
        lab.toggle_newtonian();

        assert_eq!(lab.grid().azimuth(), reference.grid().azimuth());
        assert_eq!(lab.grid().style().hex, "#00ffff");
    }

    #[test]
    fn test_mode_toggle_restyles_immediately() {
        let mut lab = lab();
        let rev = lab.horizon().revision();
        lab.toggle_newtonian();
        assert_eq!(lab.horizon().revision(), rev + 1);
        assert_eq!(lab.horizon().style().alpha, 0.5);
        assert_eq!(lab.grid().style().hex, "#444444");
        assert!((lab.grid().point(0, 0)[2] - (-7.0 - 1.0 / 1.1)).abs() < 1e-12);
    }

    #[test]
    fn test_disk_ignores_spin_and_mode() {
        let mut a = lab();
        let mut b = lab();
        b.set_spin(0.0);
        b.toggle_newtonian();
        for _ in 0..25 {
            a.advance();
            b.advance();
        }
        assert_eq!(a.particles().azimuth(), b.particles().azimuth());
    }

    #[test]
    fn test_hud_panel_cycles_back_after_four() {
        let mut lab = lab();
        let start = lab.hud_panel();
        for _ in 0..4 {
            lab.cycle_hud_panel();
        }
        assert_eq!(lab.hud_panel(), start);
    }
}
