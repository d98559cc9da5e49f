//! Headless run of the lab: a scripted session of ticks, slider edits and
//! mode toggles, printing what a viewer would see at each step.

use bevy::app::App;
use bevy::log::LogPlugin;
use kerr_core::{HudPanel, LabConfig};
use kerr_sim::LabState;

/// Innermost grid ring's total twist, in turns
fn inner_twist_turns(lab: &LabState) -> f64 {
    lab.grid().azimuth()[0] / std::f64::consts::TAU
}

fn report(step: &str, lab: &LabState) {
    let p = lab.params();
    let horizon = lab.horizon().radius();
    let first = lab.particles().positions().first().copied().unwrap_or_default();

    println!(
        "{:<28} M={:.1} a={:.2} mode={:<20} r+={:.4}{} twist={:.3} turns p0=({:+.3}, {:+.3}, {:+.3})",
        step,
        p.mass,
        p.spin,
        p.mode.name(),
        horizon.value(),
        if horizon.is_fallback() { " (fallback)" } else { "" },
        inner_twist_turns(lab),
        first[0],
        first[1],
        first[2],
    );
}

fn run_ticks(lab: &mut LabState, n: u32) {
    for _ in 0..n {
        lab.advance();
    }
}

fn main() {
    // Installs the global log subscriber so the lab's info!/warn! lines show up
    App::new().add_plugins(LogPlugin::default());

    let config = LabConfig::default();
    let ticks_per_second = 1000 / config.tick_period_ms.max(1) as u32;

    eprintln!(
        "Simulating {} particles at {} ticks/s (seed {})...",
        config.particle_count, ticks_per_second, config.seed
    );

    let mut lab = LabState::new(config);
    report("start", &lab);

    run_ticks(&mut lab, ticks_per_second * 10);
    report("10 s relativistic", &lab);

    lab.toggle_newtonian();
    run_ticks(&mut lab, ticks_per_second * 5);
    report("5 s newtonian (frozen)", &lab);

    lab.toggle_newtonian();
    lab.set_spin(0.0);
    report("spin 0 (Schwarzschild)", &lab);

    lab.set_spin(0.99);
    lab.set_mass(0.5);
    report("M=0.5 a=0.99", &lab);

    lab.toggle_paused();
    run_ticks(&mut lab, ticks_per_second);
    report("1 s paused", &lab);
    lab.toggle_paused();

    while lab.hud_panel() != HudPanel::Horizon {
        lab.cycle_hud_panel();
    }
    println!();
    for line in lab.hud() {
        println!("{}", line.text);
    }

    eprintln!("Done after {} ticks.", lab.ticks());
}
