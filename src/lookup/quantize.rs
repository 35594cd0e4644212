//! Seconds <-> milliseconds quantization for lookup keys

use std::cmp::Ordering;

/// Convert a seconds value into a millisecond key.
///
/// Midpoints round to even, the same way the settings host rounds, so a
/// value typed as `0.0005` lands on `0` rather than `1`. Values beyond the
/// `i32` range saturate; the validation layer rejects those before they get
/// here.
#[inline]
pub fn seconds_to_ms(seconds: f64) -> i32 {
    (seconds * 1000.0).round_ties_even() as i32
}

/// Millisecond key back to seconds
#[inline]
pub fn ms_to_seconds(ms: i32) -> f64 {
    ms as f64 / 1000.0
}

/// Force a seconds value to three decimal places.
///
/// Re-quantizing the result always yields the same key, which keeps
/// near-identical inputs from producing distinct lookup rows.
#[inline]
pub fn canonical_seconds(seconds: f64) -> f64 {
    ms_to_seconds(seconds_to_ms(seconds))
}

/// Display text for a millisecond key, e.g. `30000` -> `"30"`, `1500` -> `"1.5"`
pub fn format_seconds(ms: i32) -> String {
    ms_to_seconds(ms).to_string()
}

/// Order two seconds strings by numeric value.
///
/// Unparseable text sorts after every number so a half-typed row never
/// jumps to the top of a list.
pub fn compare_seconds_text(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.total_cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
