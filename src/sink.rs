//! Where finished frames go

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use epd_waveshare::color::TriColor;
use image::{Rgb, RgbImage};
use log::info;

use crate::framebuffer::Framebuffer;

/// Receives a completed frame, e.g. a panel driver or a preview writer
pub trait FrameSink {
    /// Pushes `frame` out. The frame is complete; it is never streamed.
    fn present(&mut self, frame: &Framebuffer) -> Result<()>;
}

/// Writes frames as PNG images, white, black and red
#[derive(Debug, Clone)]
pub struct PngSink {
    path: PathBuf,
}

impl PngSink {
    /// Sink writing to `path`, replacing the file on every frame
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Output file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Screen color of an ink
fn rgb(color: TriColor) -> Rgb<u8> {
    match color {
        TriColor::White => Rgb([0xFF, 0xFF, 0xFF]),
        TriColor::Black => Rgb([0x00, 0x00, 0x00]),
        TriColor::Chromatic => Rgb([0xD0, 0x10, 0x10]),
    }
}

/// Converts a frame to an RGB image
pub fn to_image(frame: &Framebuffer) -> RgbImage {
    RgbImage::from_fn(frame.width(), frame.height(), |x, y| {
        let ink = frame.pixel(x as i32, y as i32).unwrap_or(TriColor::White);
        rgb(ink)
    })
}

impl FrameSink for PngSink {
    fn present(&mut self, frame: &Framebuffer) -> Result<()> {
        to_image(frame)
            .save_with_format(&self.path, image::ImageFormat::Png)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        info!(
            "Wrote {}x{} preview to {}",
            frame.width(),
            frame.height(),
            self.path.display()
        );
        Ok(())
    }
}
