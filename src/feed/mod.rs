//! Event feed: turns a JSON document into display-ready events
//!
//! This is the hand-off point from whatever fetches the calendar. Instants are
//! converted to the display time zone here, so everything downstream works in
//! local dates.

mod types;

pub use types::{EventTime, FeedDocument, FeedEvent, When};

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, LocalResult, NaiveDate, TimeZone};
use chrono_tz::Tz;
use log::{debug, info};

use crate::calendar::Event;

/// Decodes a feed document and resolves every entry to `tz`.
///
/// Lanes are left at 0; they are assigned when the day map is built.
pub fn parse_events(json: &str, tz: Tz) -> Result<Vec<Event>> {
    let document: FeedDocument =
        serde_json::from_str(json).context("Failed to decode event feed")?;

    document
        .items
        .iter()
        .map(|item| to_event(item, tz).with_context(|| format!("Invalid event {}", item)))
        .collect()
}

/// Reads and decodes the feed document at `path`
pub fn load_events(path: &Path, tz: Tz) -> Result<Vec<Event>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read event feed {}", path.display()))?;
    let events = parse_events(&json, tz)?;
    info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

fn to_event(item: &FeedEvent, tz: Tz) -> Result<Event> {
    let start = item
        .start
        .when()
        .ok_or_else(|| anyhow!("no date found on event"))?;
    let end = item
        .end
        .when()
        .ok_or_else(|| anyhow!("no end date found on event"))?;

    let event = Event {
        summary: item.summary.clone(),
        start: resolve(start, tz)?,
        end: resolve(end, tz)?,
        all_day: matches!(start, When::Day(_)),
        slot: 0,
    };
    debug!("{} -> {} .. {}", item, event.start, event.end);
    Ok(event)
}

fn resolve(when: When, tz: Tz) -> Result<DateTime<Tz>> {
    match when {
        When::Instant(instant) => Ok(instant.with_timezone(&tz)),
        When::Day(day) => local_midnight(day, tz),
    }
}

/// Start of `day` in `tz`, the first valid instant when midnight is skipped
fn local_midnight(day: NaiveDate, tz: Tz) -> Result<DateTime<Tz>> {
    let midnight = day.and_time(chrono::NaiveTime::MIN);
    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(at) | LocalResult::Ambiguous(at, _) => Ok(at),
        LocalResult::None => (1..=2)
            .map(|hour| midnight + chrono::Duration::hours(hour))
            .find_map(|later| tz.from_local_datetime(&later).earliest())
            .ok_or_else(|| anyhow!("{} has no midnight in {}", day, tz)),
    }
}
