use serde::{Deserialize, Serialize};

/// Range and granularity of a user-facing parameter control
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    /// Increment of one slider notch
    pub step: f64,
    /// Value at startup
    pub initial: f64,
}

/// Mass slider: M in [0.5, 2.0], notches of 0.1
pub const MASS_SLIDER: SliderRange = SliderRange {
    min: 0.5,
    max: 2.0,
    step: 0.1,
    initial: 1.0,
};

/// Spin slider: a in [0.0, 0.99], notches of 0.01
pub const SPIN_SLIDER: SliderRange = SliderRange {
    min: 0.0,
    max: 0.99,
    step: 0.01,
    initial: 0.90,
};

impl SliderRange {
    /// Clamp a value into range. Returns None for NaN or infinities.
    pub fn clamp(&self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        Some(value.clamp(self.min, self.max))
    }

    /// Move `notches` steps away from `value`, snapped to the notch grid and clamped
    pub fn step_by(&self, value: f64, notches: i32) -> f64 {
        let index = ((value - self.min) / self.step).round() + notches as f64;
        (self.min + index * self.step).clamp(self.min, self.max)
    }
}

/// Gravity model used for the grid and the horizon styling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GravityMode {
    /// Kerr spacetime: frame dragging on, mass-coupled funnel
    #[default]
    Relativistic,
    /// Classical gravity for contrast: no twist, mass-independent funnel
    Newtonian,
}

impl GravityMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Relativistic => "RELATIVISTIC (KERR)",
            Self::Newtonian => "NEWTONIAN (CLASSIC)",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Relativistic => Self::Newtonian,
            Self::Newtonian => Self::Relativistic,
        }
    }
}

/// Which educational panel the HUD shows under the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HudPanel {
    #[default]
    Dashboard,
    Horizon,
    TimeDilation,
    FrameDragging,
}

impl HudPanel {
    /// Next panel in the fixed cycle (period 4)
    pub fn next(self) -> Self {
        match self {
            Self::Dashboard => Self::Horizon,
            Self::Horizon => Self::TimeDilation,
            Self::TimeDilation => Self::FrameDragging,
            Self::FrameDragging => Self::Dashboard,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Horizon => "Event Horizon",
            Self::TimeDilation => "Time Dilation",
            Self::FrameDragging => "Frame Dragging",
        }
    }
}

/// What happened to a parameter input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputOutcome {
    /// Stored as given
    Applied(f64),
    /// Out of range; the clamped value was stored
    Clamped { requested: f64, applied: f64 },
    /// Not a finite number; previous value kept
    Ignored,
}

/// Mass, spin and gravity mode. The single mutable source of truth the
/// disk, grid and horizon read from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Black hole mass M
    pub mass: f64,
    /// Spin parameter a
    pub spin: f64,
    pub mode: GravityMode,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            mass: MASS_SLIDER.initial,
            spin: SPIN_SLIDER.initial,
            mode: GravityMode::Relativistic,
        }
    }
}

impl SimulationParameters {
    pub fn set_mass(&mut self, mass: f64) -> InputOutcome {
        apply(&mut self.mass, mass, &MASS_SLIDER)
    }

    pub fn set_spin(&mut self, spin: f64) -> InputOutcome {
        apply(&mut self.spin, spin, &SPIN_SLIDER)
    }

    /// Flip between relativistic and Newtonian; returns the new mode
    pub fn toggle_mode(&mut self) -> GravityMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    pub fn is_newtonian(&self) -> bool {
        self.mode == GravityMode::Newtonian
    }
}

fn apply(slot: &mut f64, requested: f64, range: &SliderRange) -> InputOutcome {
    match range.clamp(requested) {
        None => InputOutcome::Ignored,
        Some(applied) => {
            *slot = applied;
            if applied == requested {
                InputOutcome::Applied(applied)
            } else {
                InputOutcome::Clamped { requested, applied }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = SimulationParameters::default();
        assert_eq!(p.mass, 1.0);
        assert_eq!(p.spin, 0.90);
        assert!(!p.is_newtonian());
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        let mut p = SimulationParameters::default();
        assert_eq!(
            p.set_mass(5.0),
            InputOutcome::Clamped { requested: 5.0, applied: 2.0 }
        );
        assert_eq!(p.mass, 2.0);

        assert_eq!(
            p.set_spin(-0.3),
            InputOutcome::Clamped { requested: -0.3, applied: 0.0 }
        );
        assert_eq!(p.spin, 0.0);

        assert_eq!(p.set_spin(0.5), InputOutcome::Applied(0.5));
    }

    #[test]
    fn test_non_finite_input_is_ignored() {
        let mut p = SimulationParameters::default();
        assert_eq!(p.set_mass(f64::NAN), InputOutcome::Ignored);
        assert_eq!(p.set_spin(f64::INFINITY), InputOutcome::Ignored);
        assert_eq!(p.mass, 1.0);
        assert_eq!(p.spin, 0.90);
    }

    #[test]
    fn test_toggle_mode_round_trip() {
        let mut p = SimulationParameters::default();
        assert_eq!(p.toggle_mode(), GravityMode::Newtonian);
        assert!(p.is_newtonian());
        assert_eq!(p.toggle_mode(), GravityMode::Relativistic);
    }

    #[test]
    fn test_hud_panel_cycle_has_period_four() {
        let start = HudPanel::default();
        let mut panel = start;
        for _ in 0..3 {
            panel = panel.next();
            assert_ne!(panel, start);
        }
        assert_eq!(panel.next(), start);
    }

    #[test]
    fn test_slider_steps_snap_and_clamp() {
        assert!((MASS_SLIDER.step_by(1.0, 1) - 1.1).abs() < 1e-12);
        assert!((MASS_SLIDER.step_by(1.04, 0) - 1.0).abs() < 1e-12);
        assert_eq!(MASS_SLIDER.step_by(2.0, 3), 2.0);
        assert_eq!(MASS_SLIDER.step_by(0.5, -1), 0.5);
        assert_eq!(SPIN_SLIDER.step_by(0.98, 5), 0.99);
        assert!((SPIN_SLIDER.step_by(0.90, -1) - 0.89).abs() < 1e-12);
    }
}
