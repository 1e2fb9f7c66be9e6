use std::fmt::Display;
use std::path::PathBuf;

use chrono::{DateTime, Local, TimeZone};
use macroquad::texture::Image;

use super::Renderer;
use crate::domain::Grid;
use crate::error::{Error, Result};

/// Something that can persist an image of the current grid
pub trait SnapshotSink {
    /// Capture `grid` and return where it went
    fn capture(&mut self, grid: &Grid) -> Result<PathBuf>;
}

/// `screenshot_<YYYYMMDDHHMMSS>.png`
pub fn snapshot_file_name<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!("screenshot_{}.png", at.format("%Y%m%d%H%M%S"))
}

/// Writes PNG snapshots rendered exactly as the window shows the grid
pub struct PngSnapshots {
    renderer: Renderer,
    directory: PathBuf,
}

impl PngSnapshots {
    pub fn new(renderer: Renderer, directory: impl Into<PathBuf>) -> Self {
        Self {
            renderer,
            directory: directory.into(),
        }
    }

    /// Render `grid` into a fresh off-screen image
    pub fn render(&self, grid: &Grid) -> Image {
        let (width, height) = self.renderer.canvas_size(grid);
        let mut image = Image::gen_image_color(
            width as u16,
            height as u16,
            self.renderer.palette().background,
        );
        self.renderer.draw(&mut image, grid);
        image
    }

    /// Write a snapshot named after `at`
    pub fn save_at<Tz: TimeZone>(&self, grid: &Grid, at: &DateTime<Tz>) -> Result<PathBuf>
    where
        Tz::Offset: Display,
    {
        let path = self.directory.join(snapshot_file_name(at));
        let image = self.render(grid);

        image::save_buffer(
            &path,
            &image.bytes,
            u32::from(image.width),
            u32::from(image.height),
            image::ColorType::Rgba8,
        )
        .map_err(|source| Error::Snapshot {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}

impl SnapshotSink for PngSnapshots {
    fn capture(&mut self, grid: &Grid) -> Result<PathBuf> {
        let path = self.save_at(grid, &Local::now())?;
        let name = path.file_name().unwrap_or(path.as_os_str()).to_string_lossy();
        println!("Screenshot saved as {}", name);
        log::info!("snapshot written to {}", path.display());
        Ok(path)
    }
}
