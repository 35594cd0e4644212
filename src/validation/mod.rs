//! Boundary validation for lookup rows typed into a settings surface
//!
//! The lookup model itself accepts any integers; everything a user types
//! goes through here first so the model only ever sees checked values.

mod time_parser;

pub use time_parser::*;

use crate::error::{RtaTbError, Result};
use crate::lookup::{seconds_to_ms, LookupEntry, LookupTable};

/// Parse a points value; must be a whole, non-negative number
pub fn parse_points(text: &str) -> Result<i32> {
    let points: i32 = text
        .trim()
        .parse()
        .map_err(|_| RtaTbError::NonNumericPoints(text.to_string()))?;
    if points < 0 {
        return Err(RtaTbError::NegativePoints(points));
    }
    Ok(points)
}

/// Validate a (max time, points) pair and quantize the time to a key.
///
/// The time is checked first, then the points, so the user sees the same
/// message order the settings form always showed. Negative times pass.
pub fn validate_row(time_text: &str, points_text: &str) -> Result<LookupEntry> {
    let seconds = parse_time(time_text)?;
    let points = parse_points(points_text)?;
    Ok(LookupEntry {
        max_time_ms: seconds_to_ms(seconds),
        points,
    })
}

/// Validate and insert a typed row; the table is untouched on any error
pub fn add_lookup_row(
    table: &mut LookupTable,
    time_text: &str,
    points_text: &str,
) -> Result<LookupEntry> {
    let entry = validate_row(time_text, points_text)?;
    table.add(entry.max_time_ms, entry.points)?;
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_points() {
        assert_eq!(parse_points("62000"), Ok(62000));
        assert_eq!(parse_points(" 0 "), Ok(0));
        assert_eq!(parse_points("-1"), Err(RtaTbError::NegativePoints(-1)));
        assert_eq!(
            parse_points("1.5"),
            Err(RtaTbError::NonNumericPoints("1.5".to_string()))
        );
        assert!(parse_points("").is_err());
    }

    #[test]
    fn test_add_row_quantizes() {
        let mut table = LookupTable::new();
        let entry = add_lookup_row(&mut table, "0:15.0004", "99999").unwrap();
        assert_eq!(entry, LookupEntry { max_time_ms: 15000, points: 99999 });
        assert_eq!(table.get(15000), Some(99999));
    }

    #[test]
    fn test_typed_midpoints_round_to_even() {
        let mut table = LookupTable::new();
        let entry = add_lookup_row(&mut table, "0.0005", "1").unwrap();
        assert_eq!(entry.max_time_ms, 0);
        assert_eq!(entry.max_time_ms, seconds_to_ms(0.0005));

        let entry = add_lookup_row(&mut table, "2.0625", "1").unwrap();
        assert_eq!(entry.max_time_ms, 2062);
        assert_eq!(entry.max_time_ms, seconds_to_ms(2.0625));
    }

    #[test]
    fn test_near_duplicate_time_is_duplicate() {
        let mut table = LookupTable::sonic2();
        let err = add_lookup_row(&mut table, "30.0001", "1").unwrap_err();
        assert_eq!(err, RtaTbError::DuplicateKey(30000));
        assert_eq!(table, LookupTable::sonic2());
    }

    #[test]
    fn test_time_checked_before_points() {
        let mut table = LookupTable::new();
        let err = add_lookup_row(&mut table, "soon", "-5").unwrap_err();
        assert!(matches!(err, RtaTbError::InvalidTime(_)));
        assert!(table.is_empty());
    }

    #[test]
    fn test_negative_points_rejected_negative_time_allowed() {
        let mut table = LookupTable::new();
        assert_eq!(
            add_lookup_row(&mut table, "10", "-5"),
            Err(RtaTbError::NegativePoints(-5))
        );
        let entry = add_lookup_row(&mut table, "-10", "5").unwrap();
        assert_eq!(entry.max_time_ms, -10000);
    }
}
