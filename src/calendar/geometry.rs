//! Fixed layout constants, gathered in one value

use embedded_graphics::prelude::Point;

/// Panel width of the 12.48" tri-color panel, pixels horizontally
pub const PANEL_WIDTH: u32 = 1304;

/// Panel height of the 12.48" tri-color panel, pixels vertically
pub const PANEL_HEIGHT: u32 = 984;

/// Every layout measure the renderer uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Canvas width in pixels, a multiple of 8
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Outer margin around the grid
    pub margin: i32,
    /// Inner padding of a day cell
    pub cell_padding: i32,
    /// Height of the band holding the month title and day names
    pub header_height: i32,
    /// Distance from a cell's top edge to its first event baseline
    pub cell_content_offset: i32,
    /// Baseline of the month title
    pub title_baseline: i32,
    /// Baseline origin of the battery and clock readout
    pub status_origin: Point,
    /// Width reserved for the battery and clock readout
    pub status_width: i32,
    /// Outer radius of the "today" ring
    pub today_outer_radius: i32,
    /// Inner radius of the "today" ring
    pub today_inner_radius: i32,
    /// Number of displayed weeks
    pub weeks: usize,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            width: PANEL_WIDTH,
            height: PANEL_HEIGHT,
            margin: 8,
            cell_padding: 5,
            header_height: 140,
            cell_content_offset: 55,
            title_baseline: 80,
            status_origin: Point::new(2, 10),
            status_width: 100,
            today_outer_radius: 18,
            today_inner_radius: 15,
            weeks: 4,
        }
    }
}

impl Geometry {
    /// Day cells per week row, Sunday through Saturday
    pub const COLUMNS: usize = 7;

    /// Width of one day column
    pub fn column_width(&self) -> i32 {
        (self.width as i32 - self.margin * 2) / Self::COLUMNS as i32
    }

    /// Width available to event text inside a cell
    pub fn text_width(&self) -> i32 {
        self.column_width() - self.cell_padding * 2
    }

    /// Left edge of a day column
    pub fn column_left(&self, column: usize) -> i32 {
        self.margin + self.column_width() * column as i32
    }

    /// Top edge of the first week row
    pub fn grid_top(&self) -> i32 {
        self.header_height + self.margin
    }

    /// Vertical space shared by all week rows
    pub fn available_height(&self) -> i32 {
        self.height as i32 - self.header_height - self.margin * 2
    }

    /// Number of days on the grid
    pub fn visible_days(&self) -> usize {
        self.weeks * Self::COLUMNS
    }
}
