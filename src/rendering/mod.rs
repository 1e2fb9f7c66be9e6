use macroquad::prelude::*;

use crate::application::Config;
use crate::domain::Grid;

pub mod snapshot;

pub use snapshot::{PngSnapshots, SnapshotSink, snapshot_file_name};

/// Colors used to paint the grid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub alive: Color,
    pub line: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::from_rgba(15, 15, 15, 255),
            alive: Color::from_rgba(0, 255, 150, 255),
            line: Color::from_rgba(40, 40, 40, 255),
        }
    }
}

/// A pixel target the renderer can paint on. Coordinates are in pixels
/// from the top-left corner; writes past the edges are clipped.
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color);
    /// One pixel wide, covering rows `y0..y1`
    fn vertical_line(&mut self, x: u32, y0: u32, y1: u32, color: Color);
    /// One pixel high, covering columns `x0..x1`
    fn horizontal_line(&mut self, y: u32, x0: u32, x1: u32, color: Color);
}

/// The macroquad window, drawn with immediate-mode calls
pub struct Screen;

impl Surface for Screen {
    fn clear(&mut self, color: Color) {
        clear_background(color);
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color) {
        draw_rectangle(x as f32, y as f32, width as f32, height as f32, color);
    }

    fn vertical_line(&mut self, x: u32, y0: u32, y1: u32, color: Color) {
        self.fill_rect(x, y0, 1, y1.saturating_sub(y0), color);
    }

    fn horizontal_line(&mut self, y: u32, x0: u32, x1: u32, color: Color) {
        self.fill_rect(x0, y, x1.saturating_sub(x0), 1, color);
    }
}

/// Off-screen RGBA buffer, used for snapshots
impl Surface for Image {
    fn clear(&mut self, color: Color) {
        let pixel: [u8; 4] = color.into();
        self.get_image_data_mut().fill(pixel);
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color) {
        let (image_width, image_height) = (self.width as usize, self.height as usize);
        let (x0, y0) = (x as usize, y as usize);
        let x1 = (x0 + width as usize).min(image_width);
        let y1 = (y0 + height as usize).min(image_height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let pixel: [u8; 4] = color.into();
        let data = self.get_image_data_mut();
        for row in y0..y1 {
            data[row * image_width + x0..row * image_width + x1].fill(pixel);
        }
    }

    fn vertical_line(&mut self, x: u32, y0: u32, y1: u32, color: Color) {
        self.fill_rect(x, y0, 1, y1.saturating_sub(y0), color);
    }

    fn horizontal_line(&mut self, y: u32, x0: u32, x1: u32, color: Color) {
        self.fill_rect(x0, y, x1.saturating_sub(x0), 1, color);
    }
}

/// Paints a grid as filled squares with a one-pixel lattice on top
#[derive(Clone, Debug)]
pub struct Renderer {
    cell_size: u32,
    palette: Palette,
}

impl Renderer {
    pub fn new(cell_size: u32, palette: Palette) -> Self {
        Self { cell_size, palette }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.cell_size, Palette::default())
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Pixel size needed to show `grid` in full
    pub fn canvas_size(&self, grid: &Grid) -> (u32, u32) {
        let (width, height) = grid.dimensions();
        (width as u32 * self.cell_size, height as u32 * self.cell_size)
    }

    /// Draw the grid: background, then live cells, then grid lines so
    /// the lattice stays visible over filled cells.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, grid: &Grid) {
        let cs = self.cell_size;
        let (grid_width, grid_height) = grid.dimensions();
        let (canvas_width, canvas_height) = self.canvas_size(grid);

        surface.clear(self.palette.background);

        grid.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .for_each(|(x, y, _)| {
                surface.fill_rect(x as u32 * cs, y as u32 * cs, cs, cs, self.palette.alive);
            });

        for x in 0..grid_width as u32 {
            surface.vertical_line(x * cs, 0, canvas_height, self.palette.line);
        }
        for y in 0..grid_height as u32 {
            surface.horizontal_line(y * cs, 0, canvas_width, self.palette.line);
        }
    }
}
