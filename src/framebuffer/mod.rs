//! Dual plane framebuffer for black/white/red e-paper panels
//!
//! The whole calendar is drawn into one [`Framebuffer`] which is then handed
//! to whatever pushes it to the panel. Two bit planes are kept side by side,
//! the same way tri-color controllers expect a black/white RAM and a red RAM.
//!
//! ### Pixel format
//!
//! Both planes are packed 8 pixels per byte, row major, and bit 7 of a byte is
//! the leftmost pixel of that byte.
//!
//! | ink plane | accent plane | ink                      |
//! |-----------|--------------|--------------------------|
//! | `0`       | any          | [`TriColor::Black`]      |
//! | `1`       | `1`          | [`TriColor::Chromatic`]  |
//! | `1`       | `0`          | [`TriColor::White`]      |
//!
//! A fresh framebuffer is all background. Pixels outside the surface are
//! silently ignored.
//!
//! ### Usage
//!
//! Draw with the primitives in this module ([`Framebuffer::horizontal_line`],
//! [`Framebuffer::horizontal_arrow`], [`Framebuffer::disc`]), with
//! [`Framebuffer::draw_text`] for wrapped text, or with anything from
//! [`embedded_graphics`] since the framebuffer is a `DrawTarget`.

mod graphics;
mod primitives;

pub use primitives::ArrowDirection;

use epd_waveshare::color::TriColor;

/// Errors raised when the surface dimensions are unusable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramebufferError {
    /// Width or height is zero
    Empty {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
    /// Width is not a whole number of bytes
    UnalignedWidth(u32),
}

impl std::fmt::Display for FramebufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FramebufferError::Empty { width, height } => {
                write!(f, "framebuffer must not be empty, got {}x{}", width, height)
            }
            FramebufferError::UnalignedWidth(width) => {
                write!(f, "framebuffer width {} is not a multiple of 8", width)
            }
        }
    }
}

impl std::error::Error for FramebufferError {}

/// Packed two plane pixel surface
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    /// `0` = primary ink, `1` = background or accent
    ink_plane: Vec<u8>,
    /// `1` = accent, only meaningful where the ink plane is `1`
    accent_plane: Vec<u8>,
}

/// Read-only view of both planes, for display drivers and preview sinks
#[derive(Debug, Clone, Copy)]
pub struct Planes<'a> {
    /// Ink plane, `0` bits are primary ink
    pub ink: &'a [u8],
    /// Accent plane, `1` bits are accent ink where the ink plane is `1`
    pub accent: &'a [u8],
    /// Bytes per pixel row in both planes
    pub stride: usize,
}

impl std::fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Framebuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Framebuffer {
    /// Create a background filled surface
    pub fn new(width: u32, height: u32) -> Result<Self, FramebufferError> {
        if width == 0 || height == 0 {
            return Err(FramebufferError::Empty { width, height });
        }
        if width % 8 != 0 {
            return Err(FramebufferError::UnalignedWidth(width));
        }

        let size = (width / 8) as usize * height as usize;
        Ok(Self {
            width,
            height,
            ink_plane: vec![0xFF; size],
            accent_plane: vec![0x00; size],
        })
    }

    /// Surface width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Both planes, for handing the finished frame to a display
    pub fn planes(&self) -> Planes<'_> {
        Planes {
            ink: &self.ink_plane,
            accent: &self.accent_plane,
            stride: self.stride(),
        }
    }

    /// Sets one pixel.
    ///
    /// Returns `true` when the pixel is in bounds, `false` otherwise.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: TriColor) -> bool {
        let Some((index, mask)) = self.locate(x, y) else {
            return false;
        };

        match color {
            TriColor::White => {
                self.ink_plane[index] |= mask;
                self.accent_plane[index] &= !mask;
            }
            TriColor::Black => {
                self.ink_plane[index] &= !mask;
                self.accent_plane[index] &= !mask;
            }
            TriColor::Chromatic => {
                self.ink_plane[index] |= mask;
                self.accent_plane[index] |= mask;
            }
        }

        true
    }

    /// Reads one pixel back
    pub fn pixel(&self, x: i32, y: i32) -> Option<TriColor> {
        let (index, mask) = self.locate(x, y)?;

        if self.ink_plane[index] & mask == 0 {
            Some(TriColor::Black)
        } else if self.accent_plane[index] & mask != 0 {
            Some(TriColor::Chromatic)
        } else {
            Some(TriColor::White)
        }
    }

    fn stride(&self) -> usize {
        (self.width / 8) as usize
    }

    /// Byte index and bit mask of a pixel, MSB first
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }

        let (x, y) = (x as usize, y as usize);
        Some((y * self.stride() + x / 8, 0x80 >> (x % 8)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_surface_is_background() {
        let fb = Framebuffer::new(16, 2).unwrap();
        let planes = fb.planes();

        assert_eq!(planes.stride, 2);
        assert!(planes.ink.iter().all(|b| *b == 0xFF));
        assert!(planes.accent.iter().all(|b| *b == 0x00));
        assert_eq!(fb.pixel(15, 1), Some(TriColor::White));
    }

    #[test]
    fn plane_bytes_follow_bit_semantics() {
        let mut fb = Framebuffer::new(8, 1).unwrap();

        assert!(fb.set_pixel(0, 0, TriColor::Black));
        assert_eq!(fb.planes().ink[0], 0x7F);
        assert_eq!(fb.planes().accent[0], 0x00);

        assert!(fb.set_pixel(1, 0, TriColor::Chromatic));
        assert_eq!(fb.planes().ink[0], 0x7F);
        assert_eq!(fb.planes().accent[0], 0x40);

        assert!(fb.set_pixel(0, 0, TriColor::White));
        assert_eq!(fb.planes().ink[0], 0xFF);
        assert_eq!(fb.planes().accent[0], 0x40);

        assert_eq!(fb.pixel(0, 0), Some(TriColor::White));
        assert_eq!(fb.pixel(1, 0), Some(TriColor::Chromatic));
    }

    #[test]
    fn primary_ink_wins_over_stale_accent_bit() {
        let mut fb = Framebuffer::new(8, 1).unwrap();

        fb.set_pixel(3, 0, TriColor::Chromatic);
        fb.set_pixel(3, 0, TriColor::Black);

        assert_eq!(fb.pixel(3, 0), Some(TriColor::Black));
        assert_eq!(fb.planes().accent[0], 0x00);
    }

    #[test]
    fn out_of_bounds_pixel_is_ignored() {
        let mut fb = Framebuffer::new(8, 2).unwrap();
        let before = fb.clone();

        assert!(!fb.set_pixel(8, 0, TriColor::Black));
        assert!(!fb.set_pixel(0, 2, TriColor::Black));
        assert!(!fb.set_pixel(-1, 0, TriColor::Chromatic));
        assert!(fb == before);
        assert_eq!(fb.pixel(-1, -1), None);
    }

    #[test]
    fn second_row_starts_on_next_stride() {
        let mut fb = Framebuffer::new(16, 2).unwrap();

        fb.set_pixel(9, 1, TriColor::Black);

        assert_eq!(fb.planes().ink[3], 0b1011_1111);
        assert_eq!(fb.planes().ink[0..3], [0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn rejects_unusable_dimensions() {
        assert_eq!(
            Framebuffer::new(12, 4).unwrap_err(),
            FramebufferError::UnalignedWidth(12)
        );
        assert_eq!(
            Framebuffer::new(0, 4).unwrap_err(),
            FramebufferError::Empty {
                width: 0,
                height: 4
            }
        );
    }
}
