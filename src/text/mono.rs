//! [`Font`] adapter for `embedded-graphics` monospaced bitmap fonts

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    prelude::*,
    text::{Baseline, Text},
};
use epd_waveshare::color::TriColor;

use super::{Font, TextMetrics, SUBPIXELS};
use crate::framebuffer::Framebuffer;

/// A [`MonoFont`] seen through the [`Font`] capability
#[derive(Clone, Copy)]
pub struct MonoFace {
    font: &'static MonoFont<'static>,
    line_spacing: u32,
}

impl MonoFace {
    /// Wraps a bitmap font with no extra leading
    pub const fn new(font: &'static MonoFont<'static>) -> Self {
        Self {
            font,
            line_spacing: 0,
        }
    }

    /// Adds `pixels` of leading between wrapped lines
    pub const fn with_line_spacing(mut self, pixels: u32) -> Self {
        self.line_spacing = pixels;
        self
    }

    fn cell_advance(&self) -> i32 {
        (self.font.character_size.width + self.font.character_spacing) as i32 * SUBPIXELS
    }
}

impl std::fmt::Debug for MonoFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonoFace")
            .field("character_size", &self.font.character_size)
            .field("line_spacing", &self.line_spacing)
            .finish()
    }
}

impl TextMetrics for MonoFace {
    fn advance(&self, text: &str) -> i32 {
        text.chars().count() as i32 * self.cell_advance()
    }

    fn line_height(&self) -> i32 {
        (self.font.character_size.height + self.line_spacing) as i32
    }

    fn ascent(&self) -> i32 {
        self.font.baseline as i32
    }
}

impl Font for MonoFace {
    fn draw(&self, text: &str, origin: Point, color: TriColor, target: &mut Framebuffer) {
        let style = MonoTextStyle::new(self.font, color);
        // Framebuffer drawing is infallible
        let _ = Text::with_baseline(text, origin, style, Baseline::Alphabetic).draw(target);
    }
}
