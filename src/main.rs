use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use chrono_tz::Tz;
// https://docs.rs/embedded-graphics/0.8.1/embedded_graphics/mono_font/index.html#modules
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10, FONT_6X13};

use wall_calendar::calendar::{Calendar, CalendarDays, Fonts, Geometry, StatusReadout, Window};
use wall_calendar::feed;
use wall_calendar::sink::{FrameSink, PngSink};
use wall_calendar::text::MonoFace;

const TITLE_FACE: MonoFace = MonoFace::new(&FONT_10X20);
const DATE_FACE: MonoFace = MonoFace::new(&FONT_10X20);
const EVENT_FACE: MonoFace = MonoFace::new(&FONT_6X13).with_line_spacing(2);
const STATUS_FACE: MonoFace = MonoFace::new(&FONT_6X10);

/// Runtime knobs, read from the environment
#[derive(Debug)]
struct Settings {
    events: PathBuf,
    output: PathBuf,
    timezone: Tz,
    battery_percent: f64,
}

impl Settings {
    fn from_env() -> Result<Self> {
        let timezone = match std::env::var("WALL_CALENDAR_TZ") {
            Ok(name) => name
                .parse::<Tz>()
                .map_err(|e| anyhow!("Unknown time zone {}: {}", name, e))?,
            Err(_) => chrono_tz::America::New_York,
        };
        let battery_percent = match std::env::var("WALL_CALENDAR_BATTERY") {
            Ok(value) => value
                .trim()
                .parse()
                .with_context(|| format!("Invalid battery percentage {:?}", value))?,
            Err(_) => 100.0,
        };

        Ok(Self {
            events: env_path("WALL_CALENDAR_EVENTS", "events.json"),
            output: env_path("WALL_CALENDAR_OUTPUT", "calendar.png"),
            timezone,
            battery_percent,
        })
    }
}

fn env_path(key: &str, default: &str) -> PathBuf {
    std::env::var_os(key)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env()?;
    log::info!("Settings: {:?}", settings);

    let now = Utc::now().with_timezone(&settings.timezone);
    let today = now.date_naive();
    let geometry = Geometry::default();
    let window = Window::containing(today, geometry.weeks);

    let events = feed::load_events(&settings.events, settings.timezone)?;
    let days = CalendarDays::from_events(window, events);

    let fonts = Fonts {
        title: &TITLE_FACE,
        date: &DATE_FACE,
        event: &EVENT_FACE,
        status: &STATUS_FACE,
    };
    let status = StatusReadout {
        battery_percent: settings.battery_percent,
        now: now.time(),
    };

    let frame = Calendar::new(geometry, fonts)
        .render(&days, today, &status)
        .context("Failed to render calendar")?;

    let mut sink = PngSink::new(&settings.output);
    sink.present(&frame)?;

    Ok(())
}
