//! Per-week lane heights

use super::days::CalendarDays;
use super::geometry::Geometry;
use crate::text::{measure_text, TextMetrics};

/// Height every lane of one week needs so no event text is clipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotHeights {
    heights: Vec<i32>,
    fallback: i32,
    padding: i32,
}

impl SlotHeights {
    /// Measures every event of `week` with the same width and font the cell
    /// renderer will draw it with
    pub fn measure<M>(geometry: &Geometry, days: &CalendarDays, week: usize, font: &M) -> Self
    where
        M: TextMetrics + ?Sized,
    {
        let line_height = font.line_height();
        let mut heights: Vec<Option<i32>> = Vec::new();

        for column in 0..Geometry::COLUMNS {
            let day = days.window().day(week, column);
            for event in days.events_on(day) {
                let label = event.label_on(day);
                let height = measure_text(&label.text, geometry.text_width(), font).height;

                if heights.len() <= event.slot {
                    heights.resize(event.slot + 1, None);
                }
                let lane = &mut heights[event.slot];
                *lane = Some(lane.map_or(height, |h| h.max(height)));
            }
        }

        Self {
            heights: heights
                .into_iter()
                .map(|h| h.unwrap_or(line_height))
                .collect(),
            fallback: line_height,
            padding: line_height / 2,
        }
    }

    /// Number of lanes in use this week
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// Whether the week has no events at all
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Height of lane `slot`, one line for lanes nobody uses
    pub fn height(&self, slot: usize) -> i32 {
        self.heights.get(slot).copied().unwrap_or(self.fallback)
    }

    /// Gap below every lane
    pub fn padding(&self) -> i32 {
        self.padding
    }

    /// Distance from the cell content top to the top of lane `slot`
    pub fn offset(&self, slot: usize) -> i32 {
        (0..slot).map(|s| self.height(s) + self.padding).sum()
    }

    /// Total height a week row asks for
    pub fn required_height(&self, content_offset: i32) -> i32 {
        content_offset + self.offset(self.heights.len())
    }
}
