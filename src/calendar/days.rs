//! Visible window and the day to events mapping

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};

use super::event::Event;
use super::geometry::Geometry;

/// The run of days shown on the grid, always starting on a Sunday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    first: NaiveDate,
    weeks: usize,
}

impl Window {
    /// Window of `weeks` weeks holding `today`, starting on the Sunday on or
    /// before it
    pub fn containing(today: NaiveDate, weeks: usize) -> Self {
        let back = today.weekday().num_days_from_sunday();
        Self {
            first: today - Days::new(back as u64),
            weeks,
        }
    }

    /// Top left cell of the grid
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Bottom right cell of the grid
    pub fn last_day(&self) -> NaiveDate {
        self.first + Days::new(self.len().saturating_sub(1) as u64)
    }

    /// Number of displayed weeks
    pub fn weeks(&self) -> usize {
        self.weeks
    }

    /// Number of displayed days
    pub fn len(&self) -> usize {
        self.weeks * Geometry::COLUMNS
    }

    /// Whether the window shows no days at all
    pub fn is_empty(&self) -> bool {
        self.weeks == 0
    }

    /// Date shown at `week`, `column`
    pub fn day(&self, week: usize, column: usize) -> NaiveDate {
        self.first + Days::new((week * Geometry::COLUMNS + column) as u64)
    }

    /// Whether `day` is on the grid
    pub fn contains(&self, day: NaiveDate) -> bool {
        !self.is_empty() && self.first <= day && day <= self.last_day()
    }

    /// Every visible date, in grid order
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> {
        let first = self.first;
        (0..self.len()).map(move |i| first + Days::new(i as u64))
    }
}

/// Events keyed by the local day they appear on
#[derive(Debug, Clone)]
pub struct CalendarDays {
    window: Window,
    days: BTreeMap<NaiveDate, Vec<Event>>,
}

impl CalendarDays {
    /// An empty mapping over `window`
    pub fn new(window: Window) -> Self {
        Self {
            window,
            days: BTreeMap::new(),
        }
    }

    /// Builds the mapping from events in source order, assigning lanes first.
    ///
    /// Events that miss the window entirely are dropped.
    pub fn from_events(window: Window, mut events: Vec<Event>) -> Self {
        assign_slots(&window, &mut events);

        let mut days = Self::new(window);
        for event in events {
            days.insert(event);
        }
        days
    }

    /// Lists `event` under every visible day it occupies, keeping its slot
    pub fn insert(&mut self, event: Event) {
        let visible: Vec<NaiveDate> = self
            .window
            .iter()
            .filter(|day| event.occupies(*day))
            .collect();

        for day in visible {
            self.days.entry(day).or_default().push(event.clone());
        }
    }

    /// Events on `day`, in source order
    pub fn events_on(&self, day: NaiveDate) -> &[Event] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The window this mapping covers
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Number of distinct events, counted on their first visible day
    pub fn event_count(&self) -> usize {
        self.days
            .iter()
            .map(|(day, events)| {
                events
                    .iter()
                    .filter(|e| e.starts_on(*day) || *day == self.window.first_day())
                    .count()
            })
            .sum()
    }
}

/// Gives each event the lowest lane free on every visible day it spans.
///
/// Events are visited in order, so earlier events keep the lower lanes.
pub fn assign_slots(window: &Window, events: &mut [Event]) {
    let mut taken: BTreeMap<NaiveDate, Vec<bool>> = BTreeMap::new();

    for event in events.iter_mut() {
        let span: Vec<NaiveDate> = window.iter().filter(|day| event.occupies(*day)).collect();
        if span.is_empty() {
            event.slot = 0;
            continue;
        }

        let mut slot = 0;
        while span.iter().any(|day| {
            taken
                .get(day)
                .and_then(|lanes| lanes.get(slot))
                .copied()
                .unwrap_or(false)
        }) {
            slot += 1;
        }

        for day in span {
            let lanes = taken.entry(day).or_default();
            if lanes.len() <= slot {
                lanes.resize(slot + 1, false);
            }
            lanes[slot] = true;
        }
        event.slot = slot;
    }
}
