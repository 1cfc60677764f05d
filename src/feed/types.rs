//! Wire types of the event feed document

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Deserialize;

/// A feed document, `{ "items": [...] }`
#[derive(Debug, Clone, Deserialize)]
pub struct FeedDocument {
    /// Entries in source order
    #[serde(default)]
    pub items: Vec<FeedEvent>,
}

/// One entry of the feed
#[derive(Debug, Clone, Deserialize)]
pub struct FeedEvent {
    /// Title
    #[serde(default)]
    pub summary: String,
    /// Inclusive start
    pub start: EventTime,
    /// Exclusive end
    pub end: EventTime,
}

/// Either a whole day or an instant, the way calendar APIs mark all-day
/// entries
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTime {
    /// Set for all-day entries
    pub date: Option<NaiveDate>,
    /// Set for entries with a time of day
    pub date_time: Option<DateTime<FixedOffset>>,
}

/// Resolved form of an [`EventTime`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum When {
    /// A whole calendar day
    Day(NaiveDate),
    /// A point in time
    Instant(DateTime<FixedOffset>),
}

impl EventTime {
    /// An instant wins over a date when a feed sends both
    pub fn when(&self) -> Option<When> {
        match (self.date_time, self.date) {
            (Some(instant), _) => Some(When::Instant(instant)),
            (None, Some(day)) => Some(When::Day(day)),
            (None, None) => None,
        }
    }
}

impl std::fmt::Display for When {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            When::Day(day) => write!(f, "{}", day),
            When::Instant(instant) => write!(f, "{}", instant.to_rfc3339()),
        }
    }
}

impl std::fmt::Display for FeedEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.start.when() {
            Some(when) => write!(f, "{:?} at {}", self.summary, when),
            None => write!(f, "{:?}", self.summary),
        }
    }
}
