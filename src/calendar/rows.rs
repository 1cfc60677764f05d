//! Week row heights that exactly fill the canvas

use log::debug;

use super::geometry::Geometry;

/// Vertical extent of one week row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    /// Top edge
    pub top: i32,
    /// Allocated height
    pub height: i32,
}

/// Splits `available` pixels between rows asking for `required` pixels.
///
/// The result always sums to `available`. Spare room is shared evenly, with
/// the integer remainder going to the last row. When rows ask for too much
/// they shrink proportionally and the last row takes up the rounding.
pub fn distribute(required: &[i32], available: i32) -> Vec<i32> {
    let Some(last) = required.len().checked_sub(1) else {
        return Vec::new();
    };
    let total: i64 = required.iter().map(|r| *r as i64).sum();
    let rows = required.len() as i64;

    let mut heights: Vec<i32> = if total <= available as i64 {
        let extra = (available as i64 - total) / rows;
        debug!("rows fit with {} px to spare each", extra);
        required.iter().map(|r| (*r as i64 + extra) as i32).collect()
    } else {
        debug!("rows need {} px, shrinking into {}", total, available);
        required
            .iter()
            .map(|r| (*r as i64 * available as i64 / total) as i32)
            .collect()
    };

    let before_last: i32 = heights[..last].iter().sum();
    heights[last] = available - before_last;
    heights
}

/// Places week rows below the header band
#[derive(Debug, Clone, Copy)]
pub struct RowBalancer {
    top: i32,
    available: i32,
}

impl RowBalancer {
    /// Balancer for the grid area of `geometry`
    pub fn new(geometry: &Geometry) -> Self {
        Self {
            top: geometry.grid_top(),
            available: geometry.available_height(),
        }
    }

    /// Final row extents, top to bottom
    pub fn balance(&self, required: &[i32]) -> Vec<RowSpan> {
        let mut top = self.top;
        distribute(required, self.available)
            .into_iter()
            .map(|height| {
                let span = RowSpan { top, height };
                top += height;
                span
            })
            .collect()
    }
}
