use bevy::prelude::*;
use kerr_sim::LabState;

use super::camera::to_world;

/// Scale from plot line width (points) to gizmo line width (pixels)
const LINE_WIDTH_SCALE: f32 = 2.0;

/// Match gizmo line width to the grid style
pub fn configure_grid_gizmos(mut config_store: ResMut<GizmoConfigStore>, lab: Res<LabState>) {
    let (config, _) = config_store.config_mut::<DefaultGizmoConfigGroup>();
    config.line_width = lab.grid().style().line_width * LINE_WIDTH_SCALE;
}

/// Draw the spacetime grid as a wireframe: one ring per radius, one spoke per azimuth
pub fn draw_spacetime_grid(lab: Res<LabState>, mut gizmos: Gizmos) {
    let grid = lab.grid();
    let style = grid.style();
    let color = Color::srgba(style.color[0], style.color[1], style.color[2], style.alpha);

    let point = |row: usize, col: usize| {
        let [x, y, z] = grid.point(row, col);
        to_world([x as f32, y as f32, z as f32])
    };

    for col in 0..grid.cols() {
        gizmos.linestrip((0..grid.rows()).map(|row| point(row, col)), color);
    }
    for row in 0..grid.rows() {
        gizmos.linestrip((0..grid.cols()).map(|col| point(row, col)), color);
    }
}
