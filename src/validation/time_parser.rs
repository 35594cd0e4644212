//! Parser for user-typed times such as `45`, `1:30.5` or `-0:02`

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{RtaTbError, Result};

/// `[-][[h:]m:]s[.fraction]`
static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-)?((?:\d+:){0,2})(\d+(?:\.\d*)?|\.\d+)$").expect("time pattern is valid")
});

/// Parse a time into seconds.
///
/// Colon-separated groups are read as hours/minutes/seconds, so `1:30` is
/// ninety seconds. Only the seconds group may carry a fraction. No rounding
/// happens here; [`crate::lookup::seconds_to_ms`] turns the result into a key.
pub fn parse_time(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let invalid = || RtaTbError::InvalidTime(text.to_string());

    let caps = TIME_PATTERN.captures(trimmed).ok_or_else(invalid)?;
    let negative = caps.get(1).is_some();

    let mut seconds = 0.0f64;
    for group in caps[2].split(':').filter(|g| !g.is_empty()) {
        let value: f64 = group.parse().map_err(|_| invalid())?;
        seconds = seconds * 60.0 + value;
    }
    let tail: f64 = caps[3].parse().map_err(|_| invalid())?;
    seconds = seconds * 60.0 + tail;

    if seconds * 1000.0 > i32::MAX as f64 {
        return Err(invalid());
    }
    Ok(if negative { -seconds } else { seconds })
}
