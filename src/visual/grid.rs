use bevy::prelude::*;

const GRID_MIN: i32 = -10;
const GRID_MAX: i32 = 10;
const GRID_SPACING: f32 = 50.0;
const GRID_COLOR: Color = Color::srgba(0.4, 0.4, 0.4, 0.5);

/// Whether the ground grid is drawn
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDisplay {
    pub visible: bool,
}

impl Default for GridDisplay {
    fn default() -> Self {
        Self { visible: true }
    }
}

/// Line segments of a square grid on the y = 0 plane
pub fn grid_lines(min: i32, max: i32, spacing: f32) -> Vec<(Vec3, Vec3)> {
    let lo = min as f32 * spacing;
    let hi = max as f32 * spacing;

    (min..=max)
        .flat_map(|i| {
            let offset = i as f32 * spacing;
            [
                (Vec3::new(offset, 0.0, lo), Vec3::new(offset, 0.0, hi)),
                (Vec3::new(lo, 0.0, offset), Vec3::new(hi, 0.0, offset)),
            ]
        })
        .collect()
}

pub fn draw_grid(grid: Res<GridDisplay>, mut gizmos: Gizmos) {
    if !grid.visible {
        return;
    }

    for (start, end) in grid_lines(GRID_MIN, GRID_MAX, GRID_SPACING) {
        gizmos.line(start, end, GRID_COLOR);
    }
}
