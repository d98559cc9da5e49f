use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;

/// Point the camera orbits: middle of the scene box (x, y in [-6.5, 6.5], z in [-8, 5])
const FOCUS: Vec3 = Vec3::new(0.0, -1.5, 0.0);

/// Orbit camera around the black hole
#[derive(Component)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub sensitivity: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // Elevated three-quarter view, like a default 3D plot
        Self {
            yaw: -60f32.to_radians(),
            pitch: -30f32.to_radians(),
            distance: 20.0,
            sensitivity: 0.005,
        }
    }
}

impl OrbitCamera {
    fn transform(&self) -> Transform {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0);
        let eye = FOCUS + rotation * Vec3::new(0.0, 0.0, self.distance);
        Transform::from_translation(eye).looking_at(FOCUS, Vec3::Y)
    }
}

/// Spawn the 3D camera looking at the origin
pub fn spawn_camera(mut commands: Commands) {
    let orbit = OrbitCamera::default();
    let transform = orbit.transform();
    info!(
        "Camera spawned at ({:.1}, {:.1}, {:.1})",
        transform.translation.x, transform.translation.y, transform.translation.z
    );

    commands.spawn((Camera3d::default(), IsDefaultUiCamera, transform, orbit));
}

/// Rotate with right mouse drag, zoom with scroll
pub fn orbit_camera_system(
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut query: Query<(&mut Transform, &mut OrbitCamera)>,
) {
    let Ok((mut transform, mut cam)) = query.get_single_mut() else {
        return;
    };

    let mut moved = false;

    if mouse_button.pressed(MouseButton::Right) && mouse_motion.delta != Vec2::ZERO {
        let delta = mouse_motion.delta;
        cam.yaw -= delta.x * cam.sensitivity;
        cam.pitch = (cam.pitch - delta.y * cam.sensitivity).clamp(-1.5, 1.5);
        moved = true;
    }

    let scroll = mouse_scroll.delta.y;
    if scroll != 0.0 {
        cam.distance = (cam.distance * (1.0 - scroll * 0.1)).clamp(5.0, 60.0);
        moved = true;
    }

    if moved {
        *transform = cam.transform();
    }
}

/// Physics uses z-up; Bevy uses y-up. Rotate -90 degrees about x.
pub fn to_world(p: [f32; 3]) -> Vec3 {
    Vec3::new(p[0], p[2], -p[1])
}
