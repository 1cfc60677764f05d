//! `embedded-graphics` support, used for glyph rasterization

use core::convert::Infallible;

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    Pixel,
};
use epd_waveshare::color::TriColor;

use super::Framebuffer;

impl DrawTarget for Framebuffer {
    type Color = TriColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }

        Ok(())
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::{
        prelude::*,
        primitives::{PrimitiveStyle, Rectangle},
    };

    use super::*;

    #[test]
    fn primitives_draw_through_the_target() {
        let mut fb = Framebuffer::new(16, 8).unwrap();

        Rectangle::new(Point::new(2, 1), Size::new(3, 2))
            .into_styled(PrimitiveStyle::with_fill(TriColor::Chromatic))
            .draw(&mut fb)
            .unwrap();

        assert_eq!(fb.pixel(2, 1), Some(TriColor::Chromatic));
        assert_eq!(fb.pixel(4, 2), Some(TriColor::Chromatic));
        assert_eq!(fb.pixel(5, 2), Some(TriColor::White));
        assert_eq!(fb.size(), Size::new(16, 8));
    }

    #[test]
    fn clipped_pixels_are_dropped() {
        let mut fb = Framebuffer::new(8, 8).unwrap();

        Rectangle::new(Point::new(-2, -2), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(TriColor::Black))
            .draw(&mut fb)
            .unwrap();

        assert_eq!(fb.pixel(0, 0), Some(TriColor::Black));
        assert_eq!(fb.pixel(1, 1), Some(TriColor::Black));
        assert_eq!(fb.pixel(2, 2), Some(TriColor::White));
    }
}
