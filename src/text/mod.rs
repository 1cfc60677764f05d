//! Text measurement, word wrap and coloring
//!
//! Fonts are capabilities: the layout code only asks a [`TextMetrics`] how
//! wide a word is and how tall a line is, and asks a [`Font`] to put a word
//! on the [`Framebuffer`]. [`MonoFace`] adapts `embedded-graphics` bitmap
//! fonts; the layout itself never sees a concrete font type.
//!
//! Widths are reported in sub-pixel units ([`SUBPIXELS`] per pixel) so the pen
//! position can be recomputed from exact advances without collecting
//! rounding error word after word.

mod emoji;
mod layout;
mod mono;

pub use emoji::contains_emoji;
pub use layout::{measure_text, TextBlock};
pub use mono::MonoFace;

use embedded_graphics::prelude::Point;
use epd_waveshare::color::TriColor;

use crate::framebuffer::Framebuffer;

/// Sub-pixel units per pixel, 26.6 fixed point
pub const SUBPIXELS: i32 = 64;

/// Converts sub-pixel units to whole pixels, rounding half away from zero
pub fn round_subpixels(value: i32) -> i32 {
    if value >= 0 {
        (value + SUBPIXELS / 2) / SUBPIXELS
    } else {
        (value - SUBPIXELS / 2) / SUBPIXELS
    }
}

/// Measurement side of a font
pub trait TextMetrics {
    /// Horizontal advance of `text`, in sub-pixel units
    fn advance(&self, text: &str) -> i32;

    /// Distance between consecutive baselines, in whole pixels
    fn line_height(&self) -> i32;

    /// Height above the baseline, in whole pixels
    fn ascent(&self) -> i32;
}

/// A font that can also rasterize text
pub trait Font: TextMetrics {
    /// Draws `text` with its baseline origin at `origin`
    fn draw(&self, text: &str, origin: Point, color: TriColor, target: &mut Framebuffer);
}

/// Ink used from a character offset onwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpan {
    /// Character offset where this span starts
    pub start: usize,
    /// Ink of the run
    pub color: TriColor,
}

impl ColorSpan {
    /// A span starting at `start`
    pub const fn new(start: usize, color: TriColor) -> Self {
        Self { start, color }
    }

    /// A single span covering the whole string
    pub fn solid(color: TriColor) -> [ColorSpan; 1] {
        [Self::new(0, color)]
    }
}

/// Horizontal placement of the first line inside the available width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Flush with the left edge
    Left,
    /// Centered on the full string width
    Center,
}

#[cfg(test)]
pub(crate) mod testing {
    //! Deterministic fonts for layout tests

    use super::*;

    /// Every character advances the same fractional width; draws a one
    /// pixel tick per character at the baseline.
    #[derive(Debug, Clone, Copy)]
    pub struct GridFont {
        pub char_advance: i32,
        pub line_height: i32,
        pub ascent: i32,
    }

    impl GridFont {
        pub fn new(char_width_px: i32, line_height: i32) -> Self {
            Self {
                char_advance: char_width_px * SUBPIXELS,
                line_height,
                ascent: line_height * 3 / 4,
            }
        }
    }

    impl TextMetrics for GridFont {
        fn advance(&self, text: &str) -> i32 {
            text.chars().count() as i32 * self.char_advance
        }

        fn line_height(&self) -> i32 {
            self.line_height
        }

        fn ascent(&self) -> i32 {
            self.ascent
        }
    }

    impl Font for GridFont {
        fn draw(&self, text: &str, origin: Point, color: TriColor, target: &mut Framebuffer) {
            for (i, ch) in text.chars().enumerate() {
                if ch != ' ' {
                    let x = origin.x + round_subpixels(i as i32 * self.char_advance);
                    target.set_pixel(x, origin.y, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_subpixels(0), 0);
        assert_eq!(round_subpixels(31), 0);
        assert_eq!(round_subpixels(32), 1);
        assert_eq!(round_subpixels(64 * 7 + 40), 8);
        assert_eq!(round_subpixels(-32), -1);
    }
}
