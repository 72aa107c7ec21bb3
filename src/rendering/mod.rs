use macroquad::prelude::*;
use crate::application::{Camera, Mode, Status};
use crate::domain::{Algorithm, Cell, Grid};

/// Edge length of one grid cell in world units
pub const VOXEL_SIZE: f32 = 1.0;
/// Cubes are drawn slightly smaller than their cell so neighbors stay apart
const CUBE_SCALE: f32 = 0.8;

pub const BACKGROUND: Color = WHITE;
const OUTLINE: Color = Color::new(0.5, 0.5, 0.5, 1.0);
const SELECTED: Color = Color::new(0.0, 0.0, 1.0, 1.0);
const CURSOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);

/// How a single cell is drawn
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellStyle {
    Solid { fill: Color, outline: Color },
    Wire(Color),
}

/// Pick the style for a cell; `None` means nothing is drawn.
/// Seed states only get their own colors while setting.
pub fn cell_style(cell: Cell, mode: Mode) -> Option<CellStyle> {
    let alive = CellStyle::Solid { fill: BLACK, outline: OUTLINE };
    match (cell, mode) {
        (Cell::Dead, _) => None,
        (Cell::Alive, _) => Some(alive),
        (Cell::UserSet, Mode::Setting) => Some(CellStyle::Solid { fill: SELECTED, outline: OUTLINE }),
        (Cell::CursorOnSet, Mode::Setting) => Some(CellStyle::Solid { fill: CURSOR, outline: OUTLINE }),
        (Cell::UserCursor, Mode::Setting) => Some(CellStyle::Wire(CURSOR)),
        (Cell::UserSet | Cell::CursorOnSet, _) => Some(alive),
        (Cell::UserCursor, _) => None,
    }
}

/// Draw every non-dead cell as a cube through a 3D camera
pub fn draw_grid(grid: &Grid, mode: Mode, camera: &Camera) {
    let dims = grid.dimensions();
    let extent = vec3(dims.columns as f32, dims.rows as f32, dims.aisles as f32) * VOXEL_SIZE;
    let (position, target) = camera.eye_and_target(extent);

    set_camera(&Camera3D {
        position,
        target,
        up: vec3(0.0, 1.0, 0.0),
        ..Default::default()
    });

    let size = Vec3::splat(VOXEL_SIZE * CUBE_SCALE);
    for (x, y, z, cell) in grid.iter_cells() {
        let Some(style) = cell_style(cell, mode) else {
            continue;
        };
        let center = (vec3(x as f32, y as f32, z as f32) + 0.5) * VOXEL_SIZE;
        match style {
            CellStyle::Solid { fill, outline } => {
                draw_cube(center, size, None, fill);
                draw_cube_wires(center, size, outline);
            }
            CellStyle::Wire(color) => draw_cube_wires(center, size, color),
        }
    }

    set_default_camera();
}

/// Draw the status overlay in screen space
pub fn draw_hud(status: &Status, algorithm: Algorithm) {
    let mode = match status.mode {
        Mode::Setting => "Setting",
        Mode::Running => "Running",
        Mode::Paused => "Paused",
    };

    let mut lines = vec![
        format!("Mode: {mode}"),
        format!("Generation: {}", status.generation),
        format!("Alive: {}", status.population),
        format!("{} | FPS: {}", algorithm.name(), get_fps()),
    ];
    if status.mode == Mode::Setting {
        let (x, y, z) = status.cursor.position();
        lines.push(format!("Cursor: ({x}, {y}, {z})"));
        lines.push("Arrows: move  Shift+Up/Down: depth  Space: select  P: start".to_owned());
    } else {
        lines.push("P: pause  T: reset  L: random".to_owned());
    }

    for (i, line) in lines.iter().enumerate() {
        draw_text(line, 10.0, 24.0 + i as f32 * 20.0, 20.0, DARKGRAY);
    }
}
