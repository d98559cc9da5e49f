use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use kerr_physics::HorizonGeometry;
use kerr_sim::LabState;

use super::camera::to_world;

/// The event-horizon surface and the geometry revision it was built from
#[derive(Component)]
pub struct HorizonSurface {
    pub revision: u32,
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

pub fn spawn_horizon(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    lab: Res<LabState>,
) {
    let geometry = lab.horizon();
    let mesh = meshes.add(sphere_mesh(geometry));
    let material = materials.add(horizon_material(geometry));

    commands.spawn((
        Mesh3d(mesh.clone()),
        MeshMaterial3d(material.clone()),
        Transform::default(),
        HorizonSurface {
            revision: geometry.revision(),
            mesh,
            material,
        },
    ));
}

/// Rebuild the sphere only when the lab recomputed the horizon
pub fn update_horizon(
    lab: Res<LabState>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut query: Query<&mut HorizonSurface>,
) {
    let geometry = lab.horizon();
    for mut surface in query.iter_mut() {
        if surface.revision == geometry.revision() {
            continue;
        }
        meshes.insert(&surface.mesh, sphere_mesh(geometry));
        if let Some(material) = materials.get_mut(&surface.material) {
            *material = horizon_material(geometry);
        }
        surface.revision = geometry.revision();
        debug!("Horizon rebuilt at r+ = {:.3}", geometry.radius_plus());
    }
}

fn horizon_material(geometry: &HorizonGeometry) -> StandardMaterial {
    let style = geometry.style();
    StandardMaterial {
        base_color: Color::srgba(style.color[0], style.color[1], style.color[2], style.alpha),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    }
}

/// Triangulate the latitude x longitude samples of the horizon
pub fn sphere_mesh(geometry: &HorizonGeometry) -> Mesh {
    let n = geometry.samples();
    let (x, y, z) = (geometry.x(), geometry.y(), geometry.z());

    let positions: Vec<[f32; 3]> = (0..x.len())
        .map(|i| to_world([x[i] as f32, y[i] as f32, z[i] as f32]).to_array())
        .collect();
    let normals: Vec<[f32; 3]> = positions
        .iter()
        .map(|p| Vec3::from_array(*p).normalize_or_zero().to_array())
        .collect();

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_indices(Indices::U32(lattice_indices(n, n)))
}

/// Two triangles per lattice cell of a row-major rows x cols point grid
pub fn lattice_indices(rows: usize, cols: usize) -> Vec<u32> {
    let mut indices = Vec::with_capacity(rows.saturating_sub(1) * cols.saturating_sub(1) * 6);
    for r in 0..rows.saturating_sub(1) {
        for c in 0..cols.saturating_sub(1) {
            let a = (r * cols + c) as u32;
            let b = a + 1;
            let below = a + cols as u32;
            let below_next = below + 1;
            indices.extend_from_slice(&[a, below, b, b, below, below_next]);
        }
    }
    indices
}
