//! The calendar render pass
//!
//! [`Calendar::render`] draws, in order, the month title, the day name
//! headers, every week row cell by cell, and finally the clock and battery
//! readout. Week row heights are settled before any cell is drawn: each week
//! measures its event lanes ([`SlotHeights`]) and the [`RowBalancer`] turns the
//! requests into rows that exactly fill the canvas.

mod cell;
mod days;
mod event;
mod geometry;
mod rows;
mod slots;

pub use cell::{classify, CellPosition, DayCellRenderer, EventMark};
pub use days::{assign_slots, CalendarDays, Window};
pub use event::{Event, EventLabel};
pub use geometry::{Geometry, PANEL_HEIGHT, PANEL_WIDTH};
pub use rows::{distribute, RowBalancer, RowSpan};
pub use slots::SlotHeights;

use chrono::{Datelike, NaiveDate, NaiveTime};
use epd_waveshare::color::TriColor;
use log::{debug, info};

use crate::framebuffer::{Framebuffer, FramebufferError};
use crate::text::{Alignment, ColorSpan, Font};

/// Day names across the header band, Sunday first
pub const DAY_NAMES: [&str; 7] = [
    "SUNDAY",
    "MONDAY",
    "TUESDAY",
    "WEDNESDAY",
    "THURSDAY",
    "FRIDAY",
    "SATURDAY",
];

/// Battery level below which the readout turns to accent ink
const LOW_BATTERY_PERCENT: f64 = 20.0;

/// Font for every text role on the calendar
#[derive(Clone, Copy)]
pub struct Fonts<'a> {
    /// Month title
    pub title: &'a dyn Font,
    /// Day names and date numerals
    pub date: &'a dyn Font,
    /// Event text
    pub event: &'a dyn Font,
    /// Clock and battery readout
    pub status: &'a dyn Font,
}

/// Values shown in the corner readout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusReadout {
    /// Battery charge, 0 to 100
    pub battery_percent: f64,
    /// Local wall clock time of the render
    pub now: NaiveTime,
}

impl StatusReadout {
    /// Readout text, e.g. `3:04PM | 85%`
    pub fn text(&self) -> String {
        format!(
            "{} | {:.0}%",
            self.now.format("%-I:%M%p"),
            self.battery_percent
        )
    }

    /// Whether the battery is low enough to be highlighted
    pub fn is_low(&self) -> bool {
        self.battery_percent < LOW_BATTERY_PERCENT
    }
}

/// Title for the months a window covers.
///
/// `October 2026`, `October/November 2026` or `December 2026/January 2027`.
pub fn month_title(window: &Window) -> String {
    let first = window.first_day();
    let last = window.last_day();

    if first.year() != last.year() {
        format!("{}/{}", first.format("%B %Y"), last.format("%B %Y"))
    } else if first.month() != last.month() {
        format!("{}/{}", first.format("%B"), last.format("%B %Y"))
    } else {
        first.format("%B %Y").to_string()
    }
}

/// Renders a multi-week calendar onto a fresh framebuffer
pub struct Calendar<'a> {
    geometry: Geometry,
    fonts: Fonts<'a>,
}

impl<'a> Calendar<'a> {
    /// Calendar laid out with `geometry` and drawn with `fonts`
    pub fn new(geometry: Geometry, fonts: Fonts<'a>) -> Self {
        Self { geometry, fonts }
    }

    /// Layout in use
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Draws the whole calendar.
    ///
    /// Fails only when the geometry does not describe a usable surface.
    pub fn render(
        &self,
        days: &CalendarDays,
        today: NaiveDate,
        status: &StatusReadout,
    ) -> Result<Framebuffer, FramebufferError> {
        let mut fb = Framebuffer::new(self.geometry.width, self.geometry.height)?;
        let window = days.window();
        info!(
            "rendering {} weeks from {} with {} events",
            window.weeks(),
            window.first_day(),
            days.event_count()
        );

        self.draw_title(&mut fb, window);
        self.draw_day_names(&mut fb);

        let slots: Vec<SlotHeights> = (0..window.weeks())
            .map(|week| SlotHeights::measure(&self.geometry, days, week, self.fonts.event))
            .collect();
        let required: Vec<i32> = slots
            .iter()
            .map(|s| s.required_height(self.geometry.cell_content_offset))
            .collect();
        let rows = RowBalancer::new(&self.geometry).balance(&required);
        debug!("week rows requested {:?}, allocated {:?}", required, rows);

        let cells = DayCellRenderer::new(&self.geometry, self.fonts.date, self.fonts.event);
        for (week, (row, slots)) in rows.iter().zip(&slots).enumerate() {
            for column in 0..Geometry::COLUMNS {
                let day = window.day(week, column);
                let cell = CellPosition {
                    day,
                    week,
                    column,
                    row: *row,
                };
                cells.draw(&mut fb, cell, days.events_on(day), slots, today);
            }
        }

        self.draw_status(&mut fb, status);
        info!("render complete");

        Ok(fb)
    }

    fn draw_title(&self, fb: &mut Framebuffer, window: &Window) {
        fb.draw_text(
            &month_title(window),
            0,
            self.geometry.title_baseline,
            self.geometry.width as i32,
            self.fonts.title,
            &ColorSpan::solid(TriColor::Black),
            Alignment::Center,
        );
    }

    fn draw_day_names(&self, fb: &mut Framebuffer) {
        for (column, name) in DAY_NAMES.iter().enumerate() {
            fb.draw_text(
                name,
                self.geometry.column_left(column),
                self.geometry.header_height,
                self.geometry.column_width(),
                self.fonts.date,
                &ColorSpan::solid(TriColor::Black),
                Alignment::Center,
            );
        }
    }

    fn draw_status(&self, fb: &mut Framebuffer, status: &StatusReadout) {
        let color = if status.is_low() {
            TriColor::Chromatic
        } else {
            TriColor::Black
        };
        let origin = self.geometry.status_origin;

        fb.draw_text(
            &status.text(),
            origin.x,
            origin.y,
            self.geometry.status_width,
            self.fonts.status,
            &ColorSpan::solid(color),
            Alignment::Left,
        );
    }
}
