use chrono::{DateTime, Local, TimeZone, Utc};

/// `Jan _2 15:04:05`: month, space-padded day, clock time.
const STAMP_FORMAT: &str = "%b %e %H:%M:%S";

/// Format a Unix timestamp as a local-time stamp, e.g. `Mar  7 21:14:03`.
pub fn format_stamp(ts: i64) -> String {
    format_stamp_in(ts, &Local)
}

pub fn format_stamp_in<Tz>(ts: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match DateTime::<Utc>::from_timestamp(ts, 0) {
        Some(dt) => dt.with_timezone(tz).format(STAMP_FORMAT).to_string(),
        None => ts.to_string(),
    }
}
