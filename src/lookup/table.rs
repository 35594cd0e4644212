//! Ordered time -> points lookup table

use std::collections::BTreeMap;
use std::ops::Bound;

use crate::error::{RtaTbError, Result};
use crate::lookup::quantize::format_seconds;

/// One lookup row: finishing under `max_time_ms` is worth `points`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LookupEntry {
    pub max_time_ms: i32,
    pub points: i32,
}

/// Sonic 2 time bonus brackets (max time ms, points)
const SONIC2_ROWS: [(i32, i32); 8] = [
    (30000, 62000),
    (45000, 22000),
    (60000, 5000),
    (90000, 4000),
    (120000, 3000),
    (180000, 2000),
    (240000, 1000),
    (300000, 500),
];

/// Lookup table keyed by max time in milliseconds, always ascending
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTable {
    rows: BTreeMap<i32, i32>,
}

impl LookupTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Table seeded with the Sonic 2 time bonus brackets
    pub fn sonic2() -> Self {
        Self {
            rows: SONIC2_ROWS.iter().copied().collect(),
        }
    }

    /// Insert a row; a key that already exists is rejected and nothing changes
    pub fn add(&mut self, max_time_ms: i32, points: i32) -> Result<()> {
        if self.rows.contains_key(&max_time_ms) {
            return Err(RtaTbError::DuplicateKey(max_time_ms));
        }
        self.rows.insert(max_time_ms, points);
        Ok(())
    }

    /// Remove a row, returning its points. Absent keys are a no-op.
    pub fn remove(&mut self, max_time_ms: i32) -> Option<i32> {
        self.rows.remove(&max_time_ms)
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    #[inline]
    pub fn get(&self, max_time_ms: i32) -> Option<i32> {
        self.rows.get(&max_time_ms).copied()
    }

    #[inline]
    pub fn contains(&self, max_time_ms: i32) -> bool {
        self.rows.contains_key(&max_time_ms)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate rows in ascending key order.
    ///
    /// The borrow pins the table for the life of the iterator, so every call
    /// starts a fresh pass over the current contents.
    pub fn entries(&self) -> impl Iterator<Item = LookupEntry> + '_ {
        self.rows
            .iter()
            .map(|(&max_time_ms, &points)| LookupEntry { max_time_ms, points })
    }

    /// Bonus points for a level finished at `elapsed_ms`.
    ///
    /// Uses the first row whose max time is strictly above the elapsed time;
    /// past the last row the bonus is zero.
    #[inline]
    pub fn bonus_for(&self, elapsed_ms: i32) -> i32 {
        self.rows
            .range((Bound::Excluded(elapsed_ms), Bound::Unbounded))
            .next()
            .map(|(_, &points)| points)
            .unwrap_or(0)
    }

    /// Rows rendered as (seconds text, points text), ascending by seconds
    pub fn display_rows(&self) -> Vec<(String, String)> {
        self.entries()
            .map(|e| (format_seconds(e.max_time_ms), e.points.to_string()))
            .collect()
    }
}

impl FromIterator<(i32, i32)> for LookupTable {
    /// Later duplicates overwrite earlier ones; use [`LookupTable::add`] to reject them
    fn from_iter<I: IntoIterator<Item = (i32, i32)>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
