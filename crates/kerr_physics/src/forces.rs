use kerr_core::GravityMode;
use kerr_core::constants::{FUNNEL_BASE_DEPTH, FUNNEL_MASS_COUPLING, ORBIT_COEFFICIENT};

/// Keplerian-like angular velocity of a disk particle at `radius`
/// omega = 1.5 * M * r^-1.5: faster close in, scales with mass, ignores spin
pub fn angular_velocity(mass: f64, radius: f64) -> f64 {
    ORBIT_COEFFICIENT * mass * radius.powf(-1.5)
}

/// Per-tick azimuthal twist of space at `radius` (Lense-Thirring stand-in)
pub fn frame_drag(spin: f64, radius: f64, strength: f64, power: f64) -> f64 {
    (spin * strength) / radius.powf(power)
}

/// Depth of the curvature funnel at `radius`
/// The Newtonian profile ignores mass on purpose.
pub fn funnel_depth(radius: f64, mass: f64, mode: GravityMode) -> f64 {
    match mode {
        GravityMode::Relativistic => FUNNEL_BASE_DEPTH + (-FUNNEL_MASS_COUPLING * mass / radius),
        GravityMode::Newtonian => FUNNEL_BASE_DEPTH + (-1.0 / radius),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angular_velocity_falls_off_with_radius() {
        let inner = angular_velocity(1.0, 1.5);
        let outer = angular_velocity(1.0, 6.0);
        assert!(inner > outer);
        // r^-1.5: four times farther is eight times slower
        assert!((inner / outer - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_angular_velocity_scales_with_mass() {
        let w1 = angular_velocity(1.0, 3.0);
        let w2 = angular_velocity(2.0, 3.0);
        assert!((w2 / w1 - 2.0).abs() < 1e-12);
        assert!(angular_velocity(0.5, 6.0) > 0.0);
    }

    #[test]
    fn test_frame_drag_inverse_square() {
        let near = frame_drag(0.9, 1.0, 0.5, 2.0);
        let far = frame_drag(0.9, 2.0, 0.5, 2.0);
        assert!((near - 0.45).abs() < 1e-12);
        assert!((near / far - 4.0).abs() < 1e-9);
        assert_eq!(frame_drag(0.0, 1.1, 0.5, 2.0), 0.0);
    }

    #[test]
    fn test_funnel_depth_profiles() {
        assert!((funnel_depth(2.0, 1.0, GravityMode::Relativistic) - (-8.5)).abs() < 1e-12);
        assert!((funnel_depth(2.0, 1.0, GravityMode::Newtonian) - (-7.5)).abs() < 1e-12);
        // Newtonian ignores mass
        assert_eq!(
            funnel_depth(3.0, 0.5, GravityMode::Newtonian),
            funnel_depth(3.0, 2.0, GravityMode::Newtonian)
        );
    }
}
