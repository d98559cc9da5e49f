use bevy::prelude::*;
use kerr_sim::LabState;
use std::collections::HashMap;

use super::camera::to_world;

/// Marker for accretion-disk point entities in the render world
#[derive(Component)]
pub struct DiskParticle {
    pub index: usize,
}

/// Disk particles are slightly translucent
const PARTICLE_ALPHA: f32 = 0.8;

/// Shades per channel when sharing materials between particles of similar color
const COLOR_BUCKETS: f32 = 32.0;

/// Spawn one small sphere per disk particle, colored once by radius
pub fn spawn_particle_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    lab: Res<LabState>,
) {
    let mesh = meshes.add(Sphere::new(0.03).mesh().uv(6, 4));

    // The plasma gradient is smooth, so quantized colors collapse to a few dozen materials
    let mut material_cache: HashMap<[u8; 3], Handle<StandardMaterial>> = HashMap::new();

    let field = lab.particles();
    for (index, (&pos, &c)) in field.positions().iter().zip(field.colors()).enumerate() {
        let key = [
            (c[0] * COLOR_BUCKETS) as u8,
            (c[1] * COLOR_BUCKETS) as u8,
            (c[2] * COLOR_BUCKETS) as u8,
        ];
        let mat = material_cache
            .entry(key)
            .or_insert_with(|| {
                let color = Color::srgba(c[0], c[1], c[2], PARTICLE_ALPHA);
                materials.add(StandardMaterial {
                    base_color: color,
                    emissive: LinearRgba::from(color) * 2.0,
                    alpha_mode: AlphaMode::Blend,
                    unlit: true,
                    ..default()
                })
            })
            .clone();

        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(mat),
            Transform::from_translation(to_world(pos)),
            DiskParticle { index },
        ));
    }

    info!(
        "Spawned {} disk particles with {} shared materials",
        field.len(),
        material_cache.len()
    );
}

/// Copy particle positions from the lab into transforms
pub fn update_particle_visuals(lab: Res<LabState>, mut query: Query<(&mut Transform, &DiskParticle)>) {
    if !lab.is_changed() {
        return;
    }

    let positions = lab.particles().positions();
    for (mut transform, particle) in query.iter_mut() {
        if let Some(&p) = positions.get(particle.index) {
            transform.translation = to_world(p);
        }
    }
}
