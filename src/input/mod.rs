use macroquad::prelude::*;
use crate::application::{Axis, Camera, Command, Direction};

/// Keys that map to simulation commands
const COMMAND_KEYS: [KeyCode; 9] = [
    KeyCode::Q,
    KeyCode::P,
    KeyCode::T,
    KeyCode::L,
    KeyCode::Space,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
];

/// Map a pressed key to a command. `depth_selected` is the Shift modifier,
/// which turns Up/Down into z-axis moves.
pub fn command_for_key(key: KeyCode, depth_selected: bool) -> Option<Command> {
    let command = match key {
        KeyCode::Q => Command::Quit,
        KeyCode::P => Command::StartOrPause,
        KeyCode::T => Command::Reset,
        KeyCode::L => Command::RandomSeed,
        KeyCode::Space => Command::ToggleCell,
        KeyCode::Up => Command::MoveCursor {
            axis: Axis::vertical(depth_selected),
            direction: Direction::Increase,
        },
        KeyCode::Down => Command::MoveCursor {
            axis: Axis::vertical(depth_selected),
            direction: Direction::Decrease,
        },
        KeyCode::Right => Command::MoveCursor {
            axis: Axis::X,
            direction: Direction::Increase,
        },
        KeyCode::Left => Command::MoveCursor {
            axis: Axis::X,
            direction: Direction::Decrease,
        },
        _ => return None,
    };
    Some(command)
}

/// Collect the commands for every key pressed this frame
pub fn poll_commands() -> Vec<Command> {
    let depth_selected = is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift);
    COMMAND_KEYS
        .iter()
        .filter(|&&key| is_key_pressed(key))
        .filter_map(|&key| command_for_key(key, depth_selected))
        .collect()
}

/// Handle pan, zoom and rotation keys. `pan_step` is in world units.
pub fn handle_camera(camera: &mut Camera, pan_step: f32) {
    type CameraAction = (KeyCode, fn(&mut Camera, f32));

    let actions: [CameraAction; 8] = [
        (KeyCode::A, |c, step| c.pan(step, 0.0)),
        (KeyCode::D, |c, step| c.pan(-step, 0.0)),
        (KeyCode::S, |c, step| c.pan(0.0, step)),
        (KeyCode::W, |c, step| c.pan(0.0, -step)),
        (KeyCode::R, |c, _| c.zoom_in(1.1)),
        (KeyCode::F, |c, _| c.zoom_out(1.1)),
        (KeyCode::Z, |c, _| c.rotate(1.0)),
        (KeyCode::X, |c, _| c.rotate(-1.0)),
    ];

    actions
        .iter()
        .filter(|(key, _)| is_key_down(*key))
        .for_each(|(_, action)| action(camera, pan_step));

    // Reset camera with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_selects_depth_axis() {
        assert_eq!(
            command_for_key(KeyCode::Up, true),
            Some(Command::MoveCursor {
                axis: Axis::Z,
                direction: Direction::Increase,
            })
        );
        assert_eq!(
            command_for_key(KeyCode::Down, false),
            Some(Command::MoveCursor {
                axis: Axis::Y,
                direction: Direction::Decrease,
            })
        );
    }

    #[test]
    fn test_horizontal_ignores_modifier() {
        assert_eq!(command_for_key(KeyCode::Left, true), command_for_key(KeyCode::Left, false));
    }

    #[test]
    fn test_every_command_key_maps() {
        assert!(COMMAND_KEYS.iter().all(|&key| command_for_key(key, false).is_some()));
        assert_eq!(command_for_key(KeyCode::W, false), None);
    }
}
