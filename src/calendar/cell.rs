//! One day cell: rule, date, today ring and events

use chrono::{Datelike, NaiveDate};
use epd_waveshare::color::TriColor;
use log::debug;

use super::event::Event;
use super::geometry::Geometry;
use super::rows::RowSpan;
use super::slots::SlotHeights;
use crate::framebuffer::{ArrowDirection, Framebuffer};
use crate::text::{round_subpixels, Alignment, ColorSpan, Font, SUBPIXELS};

/// How an event shows up on a particular day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventMark {
    /// Plain line across the whole cell, the event runs through this day
    Bridge,
    /// Line ending in a forward arrowhead, the event ends this day
    Terminal,
    /// Summary text, drawn once per event
    Text,
}

/// Picks the mark for `event` on `day`.
///
/// `first_cell` is the top left cell of the grid, where an event that started
/// before the window still gets its text.
pub fn classify(event: &Event, day: NaiveDate, first_cell: bool) -> EventMark {
    if event.starts_on(day) || first_cell {
        EventMark::Text
    } else if event.ends_on(day) {
        EventMark::Terminal
    } else {
        EventMark::Bridge
    }
}

/// Position of a cell on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPosition {
    /// Date shown in the cell
    pub day: NaiveDate,
    /// Week row, 0 is the top row
    pub week: usize,
    /// Column, 0 is Sunday
    pub column: usize,
    /// Extent of the week row
    pub row: RowSpan,
}

impl CellPosition {
    fn is_first(&self) -> bool {
        self.week == 0 && self.column == 0
    }

    fn is_last_column(&self) -> bool {
        self.column + 1 == Geometry::COLUMNS
    }
}

/// Draws day cells
pub struct DayCellRenderer<'a> {
    geometry: &'a Geometry,
    date_font: &'a dyn Font,
    event_font: &'a dyn Font,
}

impl<'a> DayCellRenderer<'a> {
    /// Renderer using `date_font` for the day numeral and `event_font` for
    /// event text
    pub fn new(geometry: &'a Geometry, date_font: &'a dyn Font, event_font: &'a dyn Font) -> Self {
        Self {
            geometry,
            date_font,
            event_font,
        }
    }

    /// Draws the cell at `cell` with its `events` in lanes from `slots`
    pub fn draw(
        &self,
        fb: &mut Framebuffer,
        cell: CellPosition,
        events: &[Event],
        slots: &SlotHeights,
        today: NaiveDate,
    ) {
        let left = self.geometry.column_left(cell.column);
        let top = cell.row.top;

        let pad = self.geometry.cell_padding;
        fb.horizontal_line(left + pad, top, self.geometry.text_width(), TriColor::Black);
        self.draw_date(fb, left, top, cell.day, cell.day == today);

        let bottom = top + cell.row.height;
        let content_top = top + self.geometry.cell_content_offset;

        for event in events {
            let y = content_top + slots.offset(event.slot);
            if y + slots.height(event.slot) > bottom {
                debug!(
                    "no room for {:?} on {} in lane {}",
                    event.summary, cell.day, event.slot
                );
                continue;
            }

            match classify(event, cell.day, cell.is_first()) {
                EventMark::Bridge => self.draw_bridge(fb, cell, y),
                EventMark::Terminal => self.draw_terminal(fb, cell, y),
                EventMark::Text => self.draw_event_text(fb, cell, event, y),
            }
        }
    }

    fn draw_date(&self, fb: &mut Framebuffer, left: i32, top: i32, day: NaiveDate, is_today: bool) {
        let pad = self.geometry.cell_padding;
        let numeral = day.day().to_string();
        let x = left + pad;
        let baseline = top + pad + self.date_font.line_height();

        if is_today {
            let width = round_subpixels(self.date_font.advance(&numeral));
            let cx = x + width / 2;
            let cy = top - pad + self.date_font.line_height();
            fb.disc(cx, cy, self.geometry.today_outer_radius, TriColor::Chromatic);
            fb.disc(cx, cy, self.geometry.today_inner_radius, TriColor::White);
        }

        fb.draw_text(
            &numeral,
            x,
            baseline,
            self.geometry.column_width(),
            self.date_font,
            &ColorSpan::solid(TriColor::Black),
            Alignment::Left,
        );
    }

    /// Row a carryover line runs along for text with baseline `y`
    fn line_y(&self, y: i32) -> i32 {
        y - self.event_font.ascent() / 2
    }

    fn draw_bridge(&self, fb: &mut Framebuffer, cell: CellPosition, y: i32) {
        let margin = self.geometry.margin;
        let mut x = self.geometry.column_left(cell.column);
        let mut length = self.geometry.column_width();

        if cell.column == 0 {
            x -= margin;
            length += margin;
        }
        if cell.is_last_column() {
            length += margin;
        }

        fb.horizontal_line(x, self.line_y(y), length, TriColor::Chromatic);
    }

    fn draw_terminal(&self, fb: &mut Framebuffer, cell: CellPosition, y: i32) {
        let x = self.geometry.column_left(cell.column);
        let length = self.geometry.column_width() - self.geometry.cell_padding;

        fb.horizontal_arrow(
            x,
            self.line_y(y),
            length,
            TriColor::Chromatic,
            ArrowDirection::Forward,
        );
    }

    fn draw_event_text(&self, fb: &mut Framebuffer, cell: CellPosition, event: &Event, y: i32) {
        let font = self.event_font;
        let left = self.geometry.column_left(cell.column);
        let x = left + self.geometry.cell_padding;
        let label = event.label_on(cell.day);

        if label.continued {
            let space = (font.advance(" ") + SUBPIXELS - 1) / SUBPIXELS;
            fb.horizontal_arrow(
                x,
                self.line_y(y),
                space * 3 / 2,
                TriColor::Chromatic,
                ArrowDirection::Backward,
            );
        }

        let accented = [
            ColorSpan::new(0, TriColor::Chromatic),
            ColorSpan::new(label.accent_chars, TriColor::Black),
        ];
        let solid = ColorSpan::solid(TriColor::Black);
        let spans: &[ColorSpan] = if label.accent_chars > 0 {
            &accented
        } else {
            &solid
        };

        let block = fb.draw_text(
            &label.text,
            x,
            y,
            self.geometry.text_width(),
            font,
            spans,
            Alignment::Left,
        );

        if event.first_day() != event.last_day() {
            let last_baseline = y + (block.lines() as i32 - 1) * font.line_height();
            let tail_x = x + block.last_line_width();
            let length = left + self.geometry.column_width() - tail_x;
            self.draw_tail(fb, cell, event, tail_x, self.line_y(last_baseline), length);
        }
    }

    /// Carryover right after the text: an arrow when the event ends today,
    /// otherwise a line to the cell edge
    fn draw_tail(
        &self,
        fb: &mut Framebuffer,
        cell: CellPosition,
        event: &Event,
        x: i32,
        y: i32,
        length: i32,
    ) {
        if event.ends_on(cell.day) {
            fb.horizontal_arrow(
                x,
                y,
                length - self.geometry.cell_padding,
                TriColor::Chromatic,
                ArrowDirection::Forward,
            );
        } else if cell.is_last_column() {
            fb.horizontal_line(x, y, length + self.geometry.margin, TriColor::Chromatic);
        } else {
            fb.horizontal_line(x, y, length, TriColor::Chromatic);
        }
    }
}
