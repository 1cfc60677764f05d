//! Word wrap with per-word coloring
//!
//! Text is split on single spaces and laid out word by word. A word that does
//! not fit on the current line moves to the next one; a word wider than the
//! whole line still gets a line of its own and is never split.

use embedded_graphics::prelude::Point;
use epd_waveshare::color::TriColor;

use super::{round_subpixels, Alignment, ColorSpan, Font, TextMetrics, SUBPIXELS};
use crate::framebuffer::Framebuffer;

/// Outcome of laying out one string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    /// Total height, number of lines times the line height
    pub height: i32,
    /// Pen advance of every line, the last entry is the final line
    pub line_widths: Vec<i32>,
}

impl TextBlock {
    /// Number of wrapped lines
    pub fn lines(&self) -> usize {
        self.line_widths.len()
    }

    /// Width used on the final line, where trailing decorations continue
    pub fn last_line_width(&self) -> i32 {
        self.line_widths.last().copied().unwrap_or(0)
    }
}

/// Tracks which color span is active as the character offset moves forward
struct SpanCursor<'a> {
    spans: &'a [ColorSpan],
    next: usize,
    color: TriColor,
}

impl<'a> SpanCursor<'a> {
    fn new(spans: &'a [ColorSpan]) -> Self {
        let color = spans.first().map_or(TriColor::Black, |span| span.color);
        Self {
            spans,
            next: 1,
            color,
        }
    }

    /// Color of a word covering `offset..offset + chars`.
    ///
    /// A span starting inside the word wins for the whole word.
    fn color_for(&mut self, offset: usize, chars: usize) -> TriColor {
        while let Some(span) = self.spans.get(self.next) {
            if span.start <= offset || span.start < offset + chars {
                self.color = span.color;
                self.next += 1;
            } else {
                break;
            }
        }
        self.color
    }
}

/// Runs the wrapping decisions, handing every placed word to `place`
#[allow(clippy::too_many_arguments)]
fn layout<M, P>(
    text: &str,
    x: i32,
    y: i32,
    max_width: i32,
    metrics: &M,
    spans: &[ColorSpan],
    alignment: Alignment,
    mut place: P,
) -> TextBlock
where
    M: TextMetrics + ?Sized,
    P: FnMut(&str, Point, TriColor),
{
    let left = x * SUBPIXELS;
    let limit = max_width * SUBPIXELS;
    let space = metrics.advance(" ");
    let line_height = metrics.line_height();

    let mut pen_x = match alignment {
        Alignment::Left => left,
        Alignment::Center => left + (limit - metrics.advance(text)) / 2,
    };
    let mut pen_y = y;
    let mut words_on_line = 0usize;
    let mut line_widths = Vec::new();
    let mut cursor = SpanCursor::new(spans);
    let mut offset = 0usize;

    for word in text.split(' ') {
        let chars = word.chars().count();
        let width = metrics.advance(word);

        if words_on_line > 0 && pen_x + width - left > limit {
            line_widths.push(round_subpixels(pen_x - left));
            pen_x = left;
            pen_y += line_height;
            words_on_line = 0;
        }

        let color = cursor.color_for(offset, chars);
        place(word, Point::new(round_subpixels(pen_x), pen_y), color);

        pen_x += width + space;
        words_on_line += 1;
        offset += chars + 1;
    }

    line_widths.push(round_subpixels(pen_x - left));

    TextBlock {
        height: line_widths.len() as i32 * line_height,
        line_widths,
    }
}

/// Lays `text` out at `max_width` without drawing anything.
///
/// Makes exactly the wrapping decisions [`Framebuffer::draw_text`] makes for a
/// left aligned string.
pub fn measure_text<M>(text: &str, max_width: i32, metrics: &M) -> TextBlock
where
    M: TextMetrics + ?Sized,
{
    layout(
        text,
        0,
        0,
        max_width,
        metrics,
        &[],
        Alignment::Left,
        |_, _, _| {},
    )
}

impl Framebuffer {
    /// Draws word wrapped text.
    ///
    /// `(x, y)` is the baseline origin of the first line. Words are colored by
    /// `spans`, which must start at offset 0 and be ordered by offset.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_text<F>(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        max_width: i32,
        font: &F,
        spans: &[ColorSpan],
        alignment: Alignment,
    ) -> TextBlock
    where
        F: Font + ?Sized,
    {
        layout(
            text,
            x,
            y,
            max_width,
            font,
            spans,
            alignment,
            |word, origin, color| font.draw(word, origin, color, self),
        )
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::text::testing::GridFont;

    fn surface() -> Framebuffer {
        Framebuffer::new(256, 64).unwrap()
    }

    #[test]
    fn wraps_when_next_word_overflows() {
        let font = GridFont::new(10, 20);
        let block = measure_text("aa bb cc", 70, &font);

        assert_eq!(block.line_widths, vec![60, 30]);
        assert_eq!(block.height, 40);
        assert_eq!(block.last_line_width(), 30);
    }

    #[test]
    fn over_wide_word_takes_a_single_line() {
        let font = GridFont::new(10, 20);
        let block = measure_text("abcdefghij", 50, &font);

        assert_eq!(block.lines(), 1);
        assert_eq!(block.height, 20);
    }

    #[test]
    fn over_wide_word_in_the_middle_gets_its_own_line() {
        let font = GridFont::new(10, 20);
        let block = measure_text("ab abcdefghij cd", 50, &font);

        assert_eq!(block.line_widths, vec![30, 110, 30]);
        assert_eq!(block.height, 60);
    }

    #[test]
    fn empty_text_is_one_line() {
        let font = GridFont::new(10, 20);
        let block = measure_text("", 50, &font);

        assert_eq!(block.height, 20);
        assert_eq!(block.line_widths, vec![10]);
    }

    #[test]
    fn drawing_and_measuring_agree() {
        let font = GridFont::new(7, 12);
        let text = "Dentist appointment with the kids after school";
        let mut fb = surface();

        let drawn = fb.draw_text(
            text,
            4,
            20,
            90,
            &font,
            &ColorSpan::solid(TriColor::Black),
            Alignment::Left,
        );

        assert_eq!(drawn, measure_text(text, 90, &font));
    }

    #[test]
    fn pen_position_does_not_drift() {
        // 6.40625 px per character, per-word rounding would land on 39
        let font = GridFont {
            char_advance: 410,
            line_height: 10,
            ascent: 8,
        };
        let mut fb = surface();

        let block = fb.draw_text(
            "a a a a",
            0,
            5,
            200,
            &font,
            &ColorSpan::solid(TriColor::Black),
            Alignment::Left,
        );

        assert_eq!(fb.pixel(38, 5), Some(TriColor::Black));
        assert_eq!(fb.pixel(39, 5), Some(TriColor::White));
        assert_eq!(block.last_line_width(), 51);
    }

    #[test]
    fn span_starting_mid_word_colors_the_whole_word() {
        let font = GridFont::new(10, 20);
        let mut fb = surface();
        let spans = [
            ColorSpan::new(0, TriColor::Chromatic),
            ColorSpan::new(4, TriColor::Black),
        ];

        fb.draw_text("ab cd ef", 0, 5, 200, &font, &spans, Alignment::Left);

        assert_eq!(fb.pixel(0, 5), Some(TriColor::Chromatic));
        assert_eq!(fb.pixel(10, 5), Some(TriColor::Chromatic));
        assert_eq!(fb.pixel(30, 5), Some(TriColor::Black));
        assert_eq!(fb.pixel(40, 5), Some(TriColor::Black));
        assert_eq!(fb.pixel(60, 5), Some(TriColor::Black));
    }

    #[test]
    fn span_on_word_boundary_starts_with_that_word() {
        let font = GridFont::new(10, 20);
        let mut fb = surface();
        let spans = [
            ColorSpan::new(0, TriColor::Black),
            ColorSpan::new(3, TriColor::Chromatic),
        ];

        fb.draw_text("ab cd ef", 0, 5, 200, &font, &spans, Alignment::Left);

        assert_eq!(fb.pixel(10, 5), Some(TriColor::Black));
        assert_eq!(fb.pixel(30, 5), Some(TriColor::Chromatic));
        assert_eq!(fb.pixel(60, 5), Some(TriColor::Chromatic));
    }

    #[test]
    fn wrapped_lines_advance_by_line_height() {
        let font = GridFont::new(10, 20);
        let mut fb = surface();

        fb.draw_text(
            "aa bb cc",
            0,
            10,
            70,
            &font,
            &ColorSpan::solid(TriColor::Black),
            Alignment::Left,
        );

        assert_eq!(fb.pixel(0, 10), Some(TriColor::Black));
        assert_eq!(fb.pixel(60, 10), Some(TriColor::White));
        assert_eq!(fb.pixel(0, 30), Some(TriColor::Black));
    }

    #[test]
    fn centered_text_starts_half_the_slack_in() {
        let font = GridFont::new(10, 20);
        let mut fb = surface();

        fb.draw_text(
            "abcd",
            0,
            5,
            100,
            &font,
            &ColorSpan::solid(TriColor::Black),
            Alignment::Center,
        );

        assert_eq!(fb.pixel(30, 5), Some(TriColor::Black));
        assert_eq!(fb.pixel(20, 5), Some(TriColor::White));
    }

    proptest! {
        #[test]
        fn wrapping_is_deterministic(
            words in proptest::collection::vec("[a-z]{0,12}", 0..20),
            max_width in 1i32..200,
        ) {
            let font = GridFont::new(6, 10);
            let text = words.join(" ");

            let first = measure_text(&text, max_width, &font);
            let second = measure_text(&text, max_width, &font);

            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.height, first.lines() as i32 * 10);
            prop_assert!(first.lines() <= words.len().max(1));
        }
    }
}
