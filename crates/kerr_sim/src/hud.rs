use kerr_core::{GravityMode, HudPanel, SimulationParameters};
use kerr_physics::HorizonRadius;

const CYAN: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const GRAY: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
const ORANGE: [f32; 4] = [1.0, 0.647, 0.0, 1.0];
const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
const PURPLE: [f32; 4] = [0.6, 0.0, 1.0, 1.0];

/// One line of HUD text. Sizes are in points; the renderer scales them.
/// Text stays ASCII: the default UI font has no math glyphs.
#[derive(Debug, Clone, PartialEq)]
pub struct HudLine {
    pub text: String,
    pub color: [f32; 4],
    pub font_size: f32,
    pub bold: bool,
}

impl HudLine {
    fn new(text: impl Into<String>, color: [f32; 4], font_size: f32) -> Self {
        Self {
            text: text.into(),
            color,
            font_size,
            bold: false,
        }
    }

    fn heading(text: impl Into<String>, color: [f32; 4]) -> Self {
        Self {
            bold: true,
            ..Self::new(text, color, 12.0)
        }
    }
}

/// Build the HUD: the dashboard is always on top, the selected panel below it
pub fn compose(
    params: &SimulationParameters,
    panel: HudPanel,
    paused: bool,
    horizon: HorizonRadius,
) -> Vec<HudLine> {
    let newtonian = params.mode == GravityMode::Newtonian;
    let dash_color = if newtonian { RED } else { CYAN };
    let paused = if paused { " [PAUSED]" } else { "" };

    let mut lines = vec![
        HudLine::new(format!("MODE: {}{}", params.mode.name(), paused), dash_color, 9.0),
        HudLine::new(
            format!("Spin a={:.2} | Mass M={:.1}", params.spin, params.mass),
            dash_color,
            9.0,
        ),
    ];

    match panel {
        HudPanel::Dashboard => {}
        HudPanel::Horizon => {
            lines.push(HudLine::heading("1. EVENT HORIZON GEOMETRY", CYAN));
            lines.push(HudLine::new("Kerr: r+ = M + sqrt(M^2 - a^2)", WHITE, 14.0));
            lines.push(HudLine::new("(Non-rotating a=0 -> Rs = 2M)", GRAY, 10.0));
            match horizon {
                HorizonRadius::Exact(r) => {
                    lines.push(HudLine::new(format!("r+ = {:.3}", r), WHITE, 10.0));
                }
                HorizonRadius::NakedSingularityFallback { radius, .. } => {
                    lines.push(HudLine::new(
                        format!("a > M: no horizon (naked singularity), drawn at r = M = {:.2}", radius),
                        RED,
                        10.0,
                    ));
                }
            }
        }
        HudPanel::TimeDilation => {
            lines.push(HudLine::heading("2. TIME DILATION", ORANGE));
            lines.push(HudLine::new(
                "To a distant observer, time stops at the horizon.",
                WHITE,
                10.0,
            ));
            lines.push(HudLine::new(
                "As r -> r+, redshift -> inf. You fade out, frozen forever.",
                YELLOW,
                10.0,
            ));
        }
        HudPanel::FrameDragging => {
            lines.push(HudLine::heading("3. FRAME DRAGGING (Lense-Thirring)", PURPLE));
            if newtonian {
                lines.push(HudLine {
                    bold: true,
                    ..HudLine::new("[DISABLED IN NEWTONIAN MODE]", RED, 10.0)
                });
            } else {
                lines.push(HudLine::new("dphi -> dphi - w(r) dt", WHITE, 14.0));
                lines.push(HudLine::new("Spacetime twists with the spin.", CYAN, 10.0));
                lines.push(HudLine::new("Orbits are forced to corotate.", CYAN, 10.0));
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(lines: &[HudLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_dashboard_only() {
        let params = SimulationParameters::default();
        let lines = compose(&params, HudPanel::Dashboard, false, HorizonRadius::Exact(1.436));
        assert_eq!(
            texts(&lines),
            vec!["MODE: RELATIVISTIC (KERR)", "Spin a=0.90 | Mass M=1.0"]
        );
        assert_eq!(lines[0].color, CYAN);
    }

    #[test]
    fn test_newtonian_dashboard_is_red_and_shows_pause() {
        let mut params = SimulationParameters::default();
        params.toggle_mode();
        let lines = compose(&params, HudPanel::Dashboard, true, HorizonRadius::Exact(1.436));
        assert_eq!(lines[0].text, "MODE: NEWTONIAN (CLASSIC) [PAUSED]");
        assert_eq!(lines[1].color, RED);
    }

    #[test]
    fn test_horizon_panel_flags_fallback() {
        let params = SimulationParameters {
            mass: 0.5,
            spin: 0.99,
            ..Default::default()
        };
        let fallback = HorizonRadius::NakedSingularityFallback {
            radius: 0.5,
            discriminant: -0.7301,
        };
        let lines = compose(&params, HudPanel::Horizon, false, fallback);
        assert_eq!(lines[2].text, "1. EVENT HORIZON GEOMETRY");
        assert!(lines[2].bold);
        let last = lines.last().map(|l| l.text.as_str()).unwrap_or_default();
        assert!(last.contains("naked singularity"));
    }

    #[test]
    fn test_frame_dragging_panel_depends_on_mode() {
        let mut params = SimulationParameters::default();
        let on = compose(&params, HudPanel::FrameDragging, false, HorizonRadius::Exact(1.4));
        assert!(texts(&on).contains(&"Orbits are forced to corotate."));
        assert!(texts(&on).contains(&"dphi -> dphi - w(r) dt"));

        params.toggle_mode();
        let off = compose(&params, HudPanel::FrameDragging, false, HorizonRadius::Exact(1.4));
        assert_eq!(off.len(), 4);
        assert_eq!(off[3].text, "[DISABLED IN NEWTONIAN MODE]");
    }

    #[test]
    fn test_every_panel_is_plain_ascii() {
        let mut params = SimulationParameters::default();
        for _ in 0..2 {
            let mut panel = HudPanel::Dashboard;
            for _ in 0..4 {
                for line in compose(&params, panel, true, HorizonRadius::Exact(1.4)) {
                    assert!(line.text.is_ascii(), "non-ASCII HUD text: {}", line.text);
                }
                panel = panel.next();
            }
            params.toggle_mode();
        }
    }

    #[test]
    fn test_horizon_panel_formula_text() {
        let params = SimulationParameters::default();
        let lines = compose(&params, HudPanel::Horizon, false, HorizonRadius::Exact(1.436));
        assert_eq!(lines[3].text, "Kerr: r+ = M + sqrt(M^2 - a^2)");
        assert_eq!(lines[4].text, "(Non-rotating a=0 -> Rs = 2M)");
        assert_eq!(lines[5].text, "r+ = 1.436");
    }

    #[test]
    fn test_time_dilation_panel() {
        let params = SimulationParameters::default();
        let lines = compose(&params, HudPanel::TimeDilation, false, HorizonRadius::Exact(1.4));
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2].color, ORANGE);
        assert_eq!(lines[4].text, "As r -> r+, redshift -> inf. You fade out, frozen forever.");
    }
}
