//! Translation of raw window input into simulation commands.
//!
//! Polling the platform happens in [`poll_frame`]; everything else here is
//! pure so the mapping can be exercised without a window.

use macroquad::prelude::*;

use crate::application::{Config, PaintMode};

/// Raw input observed during one tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    CloseRequested,
    KeyPressed(KeyCode),
    /// Primary button went down at this pixel position
    PointerPressed { x: f32, y: f32 },
}

/// Pointer as sampled once per tick
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub primary_down: bool,
}

/// Everything the loop needs to know about input for one tick
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub events: Vec<InputEvent>,
    pub pointer: PointerState,
}

impl Frame {
    pub fn new(events: Vec<InputEvent>, pointer: PointerState) -> Self {
        Self { events, pointer }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    TogglePause,
    Snapshot,
    ToggleCell { x: usize, y: usize },
}

/// The only keys with a meaning, in polling order.
///
/// macroquad reports presses as a set per frame, so arrival order within
/// a tick is lost. Quit is polled last so a snapshot or pause pressed in
/// the same tick still takes effect.
pub const KEY_BINDINGS: [(KeyCode, Command); 3] = [
    (KeyCode::Space, Command::Snapshot),
    (KeyCode::P, Command::TogglePause),
    (KeyCode::Q, Command::Quit),
];

/// Map one discrete event to a command, if it has one
pub fn map_event(event: &InputEvent, config: &Config) -> Option<Command> {
    match *event {
        InputEvent::CloseRequested => Some(Command::Quit),
        InputEvent::KeyPressed(key) => KEY_BINDINGS
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, command)| *command),
        InputEvent::PointerPressed { x, y } => match config.paint_mode {
            PaintMode::Press => pixel_to_cell(x, y, config)
                .map(|(x, y)| Command::ToggleCell { x, y }),
            PaintMode::Hold => None,
        },
    }
}

/// Per-tick toggle under a held primary button (hold mode only)
pub fn map_pointer_hold(pointer: &PointerState, config: &Config) -> Option<Command> {
    if config.paint_mode != PaintMode::Hold || !pointer.primary_down {
        return None;
    }
    pixel_to_cell(pointer.x, pointer.y, config).map(|(x, y)| Command::ToggleCell { x, y })
}

/// Convert a pixel position to the grid cell under it.
///
/// Positions left of or above the canvas, or past its right/bottom edge,
/// map to nothing. A position exactly on the far edge clamps to the last
/// column or row.
pub fn pixel_to_cell(px: f32, py: f32, config: &Config) -> Option<(usize, usize)> {
    let (width, height) = (config.window_width() as f32, config.window_height() as f32);
    if !(px.is_finite() && py.is_finite()) || px < 0.0 || py < 0.0 || px > width || py > height {
        log::trace!("pointer at ({}, {}) is outside the canvas", px, py);
        return None;
    }

    let x = (px as u32 / config.cell_size) as usize;
    let y = (py as u32 / config.cell_size) as usize;
    Some((
        x.min(config.grid_width - 1),
        y.min(config.grid_height - 1),
    ))
}

/// Collect this tick's input from macroquad.
///
/// Requires [`prevent_quit`] to have been called so window close arrives
/// as an event instead of ending the process.
pub fn poll_frame() -> Frame {
    let (x, y) = mouse_position();
    let mut events = Vec::new();

    if is_mouse_button_pressed(MouseButton::Left) {
        events.push(InputEvent::PointerPressed { x, y });
    }

    events.extend(
        KEY_BINDINGS
            .iter()
            .filter(|(key, _)| is_key_pressed(*key))
            .map(|(key, _)| InputEvent::KeyPressed(*key)),
    );

    if is_quit_requested() {
        events.push(InputEvent::CloseRequested);
    }

    Frame::new(
        events,
        PointerState {
            x,
            y,
            primary_down: is_mouse_button_down(MouseButton::Left),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held_at(x: f32, y: f32) -> PointerState {
        PointerState {
            x,
            y,
            primary_down: true,
        }
    }

    #[test]
    fn test_key_bindings() {
        let config = Config::default();
        let key = |k| map_event(&InputEvent::KeyPressed(k), &config);

        assert_eq!(key(KeyCode::Q), Some(Command::Quit));
        assert_eq!(key(KeyCode::P), Some(Command::TogglePause));
        assert_eq!(key(KeyCode::Space), Some(Command::Snapshot));
        assert_eq!(key(KeyCode::Escape), None);
        assert_eq!(key(KeyCode::C), None);
    }

    #[test]
    fn test_quit_polled_last() {
        let last = KEY_BINDINGS.last().map(|(_, command)| *command);
        assert_eq!(last, Some(Command::Quit));
        assert_eq!(
            KEY_BINDINGS.iter().filter(|(_, c)| *c == Command::Quit).count(),
            1
        );
    }

    #[test]
    fn test_close_requested_quits() {
        let config = Config::default();
        assert_eq!(
            map_event(&InputEvent::CloseRequested, &config),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_pixel_to_cell() {
        let config = Config::default();
        assert_eq!(pixel_to_cell(0.0, 0.0, &config), Some((0, 0)));
        assert_eq!(pixel_to_cell(19.9, 19.9, &config), Some((0, 0)));
        assert_eq!(pixel_to_cell(20.0, 45.0, &config), Some((1, 2)));
        assert_eq!(pixel_to_cell(1799.0, 899.0, &config), Some((89, 44)));
    }

    #[test]
    fn test_pixel_on_far_edge_clamps() {
        let config = Config::default();
        assert_eq!(pixel_to_cell(1800.0, 900.0, &config), Some((89, 44)));
    }

    #[test]
    fn test_pixel_outside_canvas_ignored() {
        let config = Config::default();
        assert_eq!(pixel_to_cell(-1.0, 10.0, &config), None);
        assert_eq!(pixel_to_cell(10.0, -0.5, &config), None);
        assert_eq!(pixel_to_cell(1800.5, 10.0, &config), None);
        assert_eq!(pixel_to_cell(10.0, 2000.0, &config), None);
        assert_eq!(pixel_to_cell(f32::NAN, 10.0, &config), None);
    }

    #[test]
    fn test_hold_mode_toggles_while_held() {
        let config = Config::default();
        assert_eq!(
            map_pointer_hold(&held_at(45.0, 25.0), &config),
            Some(Command::ToggleCell { x: 2, y: 1 })
        );

        let released = PointerState {
            primary_down: false,
            ..held_at(45.0, 25.0)
        };
        assert_eq!(map_pointer_hold(&released, &config), None);

        // Presses are ignored in hold mode; the held state drives toggling
        let press = InputEvent::PointerPressed { x: 45.0, y: 25.0 };
        assert_eq!(map_event(&press, &config), None);
    }

    #[test]
    fn test_press_mode_toggles_once_per_press() {
        let config = Config::default().with_paint_mode(PaintMode::Press);
        let press = InputEvent::PointerPressed { x: 45.0, y: 25.0 };

        assert_eq!(
            map_event(&press, &config),
            Some(Command::ToggleCell { x: 2, y: 1 })
        );
        assert_eq!(map_pointer_hold(&held_at(45.0, 25.0), &config), None);
    }
}
