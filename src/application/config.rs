use std::path::PathBuf;
use std::time::Duration;

/// Edge length of one cell in pixels
pub const CELL_SIZE: u32 = 20;

/// Logical canvas the grid is carved out of
pub const CANVAS_WIDTH: u32 = 1800;
pub const CANVAS_HEIGHT: u32 = 900;

pub const GRID_WIDTH: usize = (CANVAS_WIDTH / CELL_SIZE) as usize;
pub const GRID_HEIGHT: usize = (CANVAS_HEIGHT / CELL_SIZE) as usize;

/// Upper bound on ticks (and generations) per second
pub const FPS: u32 = 10;

pub const WINDOW_TITLE: &str = "Game of Life";

/// How the primary pointer button edits the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PaintMode {
    /// Toggle the cell under the pointer on every tick the button is held.
    /// A stationary pointer flickers its cell once per tick.
    #[default]
    Hold,
    /// Toggle once per button press.
    Press,
}

/// Runtime configuration. `Default` is the reference setup.
#[derive(Clone, Debug)]
pub struct Config {
    pub cell_size: u32,
    pub grid_width: usize,
    pub grid_height: usize,
    pub fps: u32,
    pub paint_mode: PaintMode,
    /// Where snapshots are written
    pub snapshot_dir: PathBuf,
}

impl Config {
    pub fn window_width(&self) -> u32 {
        self.grid_width as u32 * self.cell_size
    }

    pub fn window_height(&self) -> u32 {
        self.grid_height as u32 * self.cell_size
    }

    /// Target duration of one tick (`1 / fps`)
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    pub fn with_paint_mode(mut self, paint_mode: PaintMode) -> Self {
        self.paint_mode = paint_mode;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            fps: FPS,
            paint_mode: PaintMode::default(),
            snapshot_dir: PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_dimensions() {
        assert_eq!(GRID_WIDTH, 90);
        assert_eq!(GRID_HEIGHT, 45);

        let config = Config::default();
        assert_eq!(config.window_width(), 1800);
        assert_eq!(config.window_height(), 900);
        assert_eq!(config.paint_mode, PaintMode::Hold);
    }

    #[test]
    fn test_tick_interval() {
        let config = Config::default();
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
    }
}
