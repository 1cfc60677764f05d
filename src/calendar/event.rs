//! Calendar events as the renderer sees them

use chrono::{DateTime, NaiveDate, Timelike};
use chrono_tz::Tz;

use crate::text::contains_emoji;

/// Indentation standing in for the "continues from before" arrow
const CONTINUATION_INDENT: &str = "  ";

/// One calendar entry, already resolved to the display time zone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Title shown in the cell
    pub summary: String,
    /// Start instant
    pub start: DateTime<Tz>,
    /// End instant, exclusive
    pub end: DateTime<Tz>,
    /// Date-only event, never shows a time of day
    pub all_day: bool,
    /// Vertical lane inside every cell the event occupies
    pub slot: usize,
}

/// Text drawn for an event on a given day, with its accent run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLabel {
    /// Full text, prefix included
    pub text: String,
    /// Leading characters drawn in accent ink
    pub accent_chars: usize,
    /// The event started before the day the label is drawn on
    pub continued: bool,
}

impl Event {
    /// Local date the event starts on
    pub fn first_day(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// Last local date the event occupies.
    ///
    /// An end exactly at midnight belongs to the previous day, so a one day
    /// all-day event (midnight to midnight) occupies a single date.
    pub fn last_day(&self) -> NaiveDate {
        let first = self.first_day();
        let end = self.end.date_naive();
        let at_midnight = self.end.num_seconds_from_midnight() == 0 && self.end.nanosecond() == 0;

        if at_midnight && end > first {
            end.pred_opt().unwrap_or(end)
        } else {
            end.max(first)
        }
    }

    /// Whether `day` is the event's first day
    pub fn starts_on(&self, day: NaiveDate) -> bool {
        self.first_day() == day
    }

    /// Whether `day` is the event's last day
    pub fn ends_on(&self, day: NaiveDate) -> bool {
        self.last_day() == day
    }

    /// Whether the event covers `day` at all
    pub fn occupies(&self, day: NaiveDate) -> bool {
        self.first_day() <= day && day <= self.last_day()
    }

    /// Short start time such as `"2pm "` or `"2:30pm "`, `None` for all-day
    /// events
    pub fn time_prefix(&self) -> Option<String> {
        if self.all_day {
            return None;
        }

        let format = if self.start.minute() == 0 {
            "%-I%P"
        } else {
            "%-I:%M%P"
        };
        Some(format!("{} ", self.start.format(format)))
    }

    /// The label drawn for this event on `day`.
    ///
    /// Continued events get an indent for the leading arrow instead of a
    /// time. The prefix, and a leading emoji word of the summary, are accent
    /// colored.
    pub fn label_on(&self, day: NaiveDate) -> EventLabel {
        let continued = !self.starts_on(day);
        let prefix = if continued {
            CONTINUATION_INDENT.to_string()
        } else {
            self.time_prefix().unwrap_or_default()
        };

        let mut accent_chars = prefix.chars().count();
        let first_word = self.summary.split(' ').next().unwrap_or_default();
        if contains_emoji(first_word) {
            accent_chars += first_word.chars().count();
        }

        EventLabel {
            text: prefix + &self.summary,
            accent_chars,
            continued,
        }
    }
}
