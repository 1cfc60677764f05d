//! Line, arrow and disc primitives

use epd_waveshare::color::TriColor;

use super::Framebuffer;

/// Rows covered above and below the shaft by an arrowhead
const ARROWHEAD_ROWS: i32 = 4;

/// Which end of a horizontal arrow carries the head
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    /// Head at the far (right) end, the event continues past this point
    Forward,
    /// Head at the near (left) end, the event continues from before
    Backward,
}

impl Framebuffer {
    /// Sets `length` consecutive pixels on row `y`, starting at `x`
    pub fn horizontal_line(&mut self, x: i32, y: i32, length: i32, color: TriColor) {
        for i in 0..length.max(0) {
            self.set_pixel(x + i, y, color);
        }
    }

    /// Draws a horizontal line with a triangular head at one end.
    ///
    /// The head spans the last `ARROWHEAD_ROWS + 1` pixels of the line on the
    /// side given by `direction` and widens by one row per column away from
    /// the tip. Nothing is drawn for an empty line.
    pub fn horizontal_arrow(
        &mut self,
        x: i32,
        y: i32,
        length: i32,
        color: TriColor,
        direction: ArrowDirection,
    ) {
        if length <= 0 {
            return;
        }
        self.horizontal_line(x, y, length, color);

        for i in 1..=ARROWHEAD_ROWS {
            let column = match direction {
                ArrowDirection::Forward => x + length - 1 - i,
                ArrowDirection::Backward => x + i,
            };
            for dy in 1..=i {
                self.set_pixel(column, y + dy, color);
                self.set_pixel(column, y - dy, color);
            }
        }
    }

    /// Fills every pixel within `radius` of the center, edge included
    pub fn disc(&mut self, cx: i32, cy: i32, radius: i32, color: TriColor) {
        let r2 = radius * radius;
        for y in cy - radius..=cy + radius {
            for x in cx - radius..=cx + radius {
                let (dx, dy) = (x - cx, y - cy);
                if dx * dx + dy * dy <= r2 {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> Framebuffer {
        Framebuffer::new(64, 32).unwrap()
    }

    fn count(fb: &Framebuffer, color: TriColor) -> usize {
        let mut n = 0;
        for y in 0..fb.height() as i32 {
            for x in 0..fb.width() as i32 {
                if fb.pixel(x, y) == Some(color) {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn line_covers_exact_length() {
        let mut fb = surface();
        fb.horizontal_line(3, 5, 10, TriColor::Black);

        assert_eq!(fb.pixel(2, 5), Some(TriColor::White));
        assert_eq!(fb.pixel(3, 5), Some(TriColor::Black));
        assert_eq!(fb.pixel(12, 5), Some(TriColor::Black));
        assert_eq!(fb.pixel(13, 5), Some(TriColor::White));
        assert_eq!(count(&fb, TriColor::Black), 10);
    }

    #[test]
    fn line_is_clipped_at_the_edges() {
        let mut fb = surface();
        fb.horizontal_line(-4, 0, 8, TriColor::Chromatic);
        fb.horizontal_line(60, 31, 10, TriColor::Chromatic);

        assert_eq!(count(&fb, TriColor::Chromatic), 4 + 4);
    }

    #[test]
    fn forward_arrow_head_sits_at_far_end() {
        let mut fb = surface();
        fb.horizontal_arrow(10, 10, 20, TriColor::Chromatic, ArrowDirection::Forward);

        // widest column is four pixels back from the tip at x = 29
        assert_eq!(fb.pixel(25, 6), Some(TriColor::Chromatic));
        assert_eq!(fb.pixel(25, 14), Some(TriColor::Chromatic));
        assert_eq!(fb.pixel(25, 5), Some(TriColor::White));
        assert_eq!(fb.pixel(24, 9), Some(TriColor::White));
        assert_eq!(fb.pixel(28, 9), Some(TriColor::Chromatic));
        assert_eq!(fb.pixel(28, 8), Some(TriColor::White));
        assert_eq!(fb.pixel(29, 9), Some(TriColor::White));
        assert_eq!(fb.pixel(11, 9), Some(TriColor::White));
        assert_eq!(count(&fb, TriColor::Chromatic), 20 + 2 * (1 + 2 + 3 + 4));
    }

    #[test]
    fn backward_arrow_head_sits_at_near_end() {
        let mut fb = surface();
        fb.horizontal_arrow(10, 10, 20, TriColor::Chromatic, ArrowDirection::Backward);

        assert_eq!(fb.pixel(11, 9), Some(TriColor::Chromatic));
        assert_eq!(fb.pixel(14, 6), Some(TriColor::Chromatic));
        assert_eq!(fb.pixel(10, 9), Some(TriColor::White));
        assert_eq!(fb.pixel(28, 9), Some(TriColor::White));
    }

    #[test]
    fn empty_arrow_draws_nothing() {
        let mut fb = surface();
        fb.horizontal_arrow(30, 10, 0, TriColor::Black, ArrowDirection::Forward);
        fb.horizontal_arrow(30, 10, -3, TriColor::Black, ArrowDirection::Backward);

        assert_eq!(count(&fb, TriColor::Black), 0);
    }

    #[test]
    fn disc_matches_squared_distance_rule() {
        let mut fb = surface();
        fb.disc(20, 15, 5, TriColor::Black);

        for y in 0..32 {
            for x in 0..64 {
                let (dx, dy) = (x - 20, y - 15);
                let inside = dx * dx + dy * dy <= 25;
                let expected = if inside {
                    TriColor::Black
                } else {
                    TriColor::White
                };
                assert_eq!(fb.pixel(x, y), Some(expected), "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn disc_leaves_just_outside_pixel_unset() {
        let mut fb = surface();
        // 5^2 + 1^2 = 26 = r^2 + 1
        fb.disc(20, 15, 5, TriColor::Black);

        assert_eq!(fb.pixel(25, 15), Some(TriColor::Black));
        assert_eq!(fb.pixel(25, 16), Some(TriColor::White));
    }

    #[test]
    fn ring_is_accent_disc_under_background_disc() {
        let mut fb = surface();
        fb.disc(30, 15, 6, TriColor::Chromatic);
        fb.disc(30, 15, 4, TriColor::White);

        assert_eq!(fb.pixel(30, 15), Some(TriColor::White));
        assert_eq!(fb.pixel(35, 15), Some(TriColor::Chromatic));
        assert_eq!(fb.pixel(37, 15), Some(TriColor::White));
    }
}
