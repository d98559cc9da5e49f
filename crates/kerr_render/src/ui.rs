use bevy::prelude::*;
use kerr_core::{MASS_SLIDER, SPIN_SLIDER};
use kerr_sim::LabState;

/// Container for the HUD lines (top left)
#[derive(Component)]
pub struct HudRoot {
    /// Lab HUD revision the children were built from
    pub revision: Option<u32>,
}

/// Plot points to UI pixels
const FONT_SCALE: f32 = 1.4;

/// Spawn the HUD container and the static controls footer
pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(4.0),
            ..default()
        },
        HudRoot { revision: None },
    ));

    commands.spawn((
        Text::new(
            "[Space] Pause | [E] Info | [N] Toggle Newtonian Mode\n\
             [Up/Down] Mass (M)  [Left/Right] Spin (a)  [RMB+Mouse] Rotate  [Scroll] Zoom",
        ),
        TextFont {
            font_size: 9.0 * FONT_SCALE,
            ..default()
        },
        TextColor(Color::srgb(0.5, 0.5, 0.5)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
    ));
}

/// Rebuild HUD lines when the lab reports new content
pub fn update_hud(
    mut commands: Commands,
    lab: Res<LabState>,
    mut query: Query<(Entity, &mut HudRoot)>,
) {
    let Ok((root, mut hud)) = query.get_single_mut() else {
        return;
    };
    if hud.revision == Some(lab.hud_revision()) {
        return;
    }
    hud.revision = Some(lab.hud_revision());

    commands.entity(root).despawn_descendants();
    commands.entity(root).with_children(|parent| {
        for line in lab.hud() {
            // Bold is approximated with a larger size; the default font has one weight
            let size = if line.bold { line.font_size + 1.0 } else { line.font_size };
            let c = line.color;
            parent.spawn((
                Text::new(line.text),
                TextFont {
                    font_size: size * FONT_SCALE,
                    ..default()
                },
                TextColor(Color::srgba(c[0], c[1], c[2], c[3])),
            ));
        }
    });
}

/// Keyboard controls: pause, info panel, gravity mode and the mass/spin sliders
pub fn lab_control_system(keyboard: Res<ButtonInput<KeyCode>>, mut lab: ResMut<LabState>) {
    if keyboard.just_pressed(KeyCode::Space) {
        lab.toggle_paused();
    }
    if keyboard.just_pressed(KeyCode::KeyE) {
        lab.cycle_hud_panel();
    }
    if keyboard.just_pressed(KeyCode::KeyN) {
        lab.toggle_newtonian();
    }

    let mass_notches = notches(&keyboard, KeyCode::ArrowUp, KeyCode::ArrowDown);
    if mass_notches != 0 {
        let mass = MASS_SLIDER.step_by(lab.params().mass, mass_notches);
        lab.set_mass(mass);
    }

    let spin_notches = notches(&keyboard, KeyCode::ArrowRight, KeyCode::ArrowLeft);
    if spin_notches != 0 {
        let spin = SPIN_SLIDER.step_by(lab.params().spin, spin_notches);
        lab.set_spin(spin);
    }
}

fn notches(keyboard: &ButtonInput<KeyCode>, up: KeyCode, down: KeyCode) -> i32 {
    keyboard.just_pressed(up) as i32 - keyboard.just_pressed(down) as i32
}
