use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};
use chrono::{DateTime, FixedOffset, Local, Utc};
use chrono_tz::Tz;

const DATE_FORMAT: &str = "%b %-d, %Y";
const TIME_FORMAT: &str = "%H:%M";

/// Zone used to render dates and times
///
/// IANA names ("America/New_York", "UTC") follow daylight saving; fixed offsets
/// ("+09:00", "-0530") never shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    Named(Tz),
    Fixed(FixedOffset),
}

impl DisplayZone {
    pub const UTC: DisplayZone = DisplayZone::Named(Tz::UTC);
}

impl FromStr for DisplayZone {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        let value = value.trim();
        if let Ok(tz) = value.parse::<Tz>() {
            return Ok(DisplayZone::Named(tz));
        }
        if let Ok(offset) = value.parse::<FixedOffset>() {
            return Ok(DisplayZone::Fixed(offset));
        }
        bail!(
            "Invalid time zone (expected an IANA name like Europe/Paris, or an offset like +09:00): {}",
            value
        )
    }
}

impl fmt::Display for DisplayZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayZone::Named(tz) => f.write_str(tz.name()),
            DisplayZone::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

/// Parse an IANA zone name or a fixed UTC offset
pub fn parse_time_zone(value: &str) -> Result<DisplayZone> {
    value.parse()
}

/// Date like "Jan 20, 2025" in the given zone, or local time if none
pub fn format_date(timestamp: &DateTime<Utc>, zone: Option<DisplayZone>) -> String {
    format_in(timestamp, zone, DATE_FORMAT)
}

/// 24-hour "HH:MM" in the given zone, or local time if none
pub fn format_time(timestamp: &DateTime<Utc>, zone: Option<DisplayZone>) -> String {
    format_in(timestamp, zone, TIME_FORMAT)
}

fn format_in(timestamp: &DateTime<Utc>, zone: Option<DisplayZone>, fmt: &str) -> String {
    match zone {
        Some(DisplayZone::Named(tz)) => timestamp.with_timezone(&tz).format(fmt).to_string(),
        Some(DisplayZone::Fixed(offset)) => timestamp.with_timezone(&offset).format(fmt).to_string(),
        None => timestamp.with_timezone(&Local).format(fmt).to_string(),
    }
}
