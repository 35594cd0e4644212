//! Settings model: scalars, lookup table, serialization and change hash

use log::{debug, warn};
use std::fmt::Display;
use std::str::FromStr;

use crate::config::document::SettingsNode;
use crate::config::frame_rate::{FrameRate, FPS_GEN_SMS};
use crate::config::hash::LegacyHash;
use crate::error::{RtaTbError, Result};
use crate::lookup::LookupTable;

/// Version written into every serialized settings tree
pub const SETTINGS_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_POINTS_PER_FRAME: i32 = 100;
pub const DEFAULT_CONTINUE_FRAMES: i32 = 120;
/// Fallback when a saved layout has no usable ContinueFrames.
/// Deliberately not [`DEFAULT_CONTINUE_FRAMES`]: saved layouts rely on it.
pub const LOAD_DEFAULT_CONTINUE_FRAMES: i32 = 1;

// Element names of the persisted layout
const EL_ROOT: &str = "Settings";
const EL_VERSION: &str = "Version";
const EL_POINTS_PER_FRAME: &str = "PointsPerFrame";
const EL_FRAMES_PER_SECOND: &str = "FramesPerSecond";
const EL_CONTINUE_FRAMES: &str = "ContinueFrames";
const EL_LOOKUP: &str = "IGTLookup";
const EL_ROW: &str = "Row";
const EL_MAX_TIME: &str = "MaxTime";
const EL_POINTS: &str = "Points";

/// Game time settings for one plugin instance
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    points_per_frame: i32,
    frame_rate: FrameRate,
    continue_frames: i32,
    igt_lookup: LookupTable,
}

impl Default for Settings {
    /// Sonic 2 on a Genesis
    fn default() -> Self {
        Self {
            points_per_frame: DEFAULT_POINTS_PER_FRAME,
            frame_rate: FrameRate::GenesisMasterSystem,
            continue_frames: DEFAULT_CONTINUE_FRAMES,
            igt_lookup: LookupTable::sonic2(),
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, then everything the tree provides
    pub fn from_node(node: &SettingsNode) -> Self {
        let mut settings = Self::default();
        settings.load(node);
        settings
    }

    // ========================================================================
    // Scalar accessors
    // ========================================================================

    #[inline]
    pub fn points_per_frame(&self) -> i32 {
        self.points_per_frame
    }

    pub fn set_points_per_frame(&mut self, points_per_frame: i32) -> Result<()> {
        self.points_per_frame = non_negative(EL_POINTS_PER_FRAME, points_per_frame)?;
        Ok(())
    }

    #[inline]
    pub fn frame_rate(&self) -> FrameRate {
        self.frame_rate
    }

    #[inline]
    pub fn frames_per_second(&self) -> f64 {
        self.frame_rate.fps()
    }

    pub fn set_frame_rate(&mut self, frame_rate: FrameRate) -> Result<()> {
        self.frame_rate = FrameRate::custom(frame_rate.fps())?;
        Ok(())
    }

    pub fn set_frames_per_second(&mut self, fps: f64) -> Result<()> {
        self.frame_rate = FrameRate::custom(fps)?;
        Ok(())
    }

    #[inline]
    pub fn continue_frames(&self) -> i32 {
        self.continue_frames
    }

    pub fn set_continue_frames(&mut self, continue_frames: i32) -> Result<()> {
        self.continue_frames = non_negative(EL_CONTINUE_FRAMES, continue_frames)?;
        Ok(())
    }

    #[inline]
    pub fn lookup(&self) -> &LookupTable {
        &self.igt_lookup
    }

    #[inline]
    pub fn lookup_mut(&mut self) -> &mut LookupTable {
        &mut self.igt_lookup
    }

    // ========================================================================
    // Load / Serialize
    // ========================================================================

    /// Apply a saved settings tree.
    ///
    /// Missing or malformed scalars fall back to their load defaults. An
    /// `IGTLookup` element replaces the whole table; without one the current
    /// table is kept.
    pub fn load(&mut self, node: &SettingsNode) {
        self.points_per_frame = field_or_default(
            node,
            EL_POINTS_PER_FRAME,
            DEFAULT_POINTS_PER_FRAME,
            |v: &i32| *v >= 0,
        );
        let fps = field_or_default(node, EL_FRAMES_PER_SECOND, FPS_GEN_SMS, |v: &f64| {
            v.is_finite() && *v > 0.0
        });
        self.frame_rate = FrameRate::from_fps(fps);
        self.continue_frames = field_or_default(
            node,
            EL_CONTINUE_FRAMES,
            LOAD_DEFAULT_CONTINUE_FRAMES,
            |v: &i32| *v >= 0,
        );

        if let Some(lookup) = node.child(EL_LOOKUP) {
            self.igt_lookup.clear();
            for row in lookup.children.iter().filter(|c| c.name == EL_ROW) {
                let added = parse_row(row)
                    .and_then(|(max_time_ms, points)| self.igt_lookup.add(max_time_ms, points));
                if let Err(e) = added {
                    warn!("Skipping lookup row: {}", e);
                }
            }
        }

        debug!(
            "Loaded settings: {} points/frame, {} fps, {} continue frames, {} lookup rows",
            self.points_per_frame,
            self.frames_per_second(),
            self.continue_frames,
            self.igt_lookup.len()
        );
    }

    /// Serialize into the persisted tree layout
    pub fn to_node(&self) -> SettingsNode {
        let mut root = SettingsNode::container(EL_ROOT);
        root.push(SettingsNode::leaf(EL_VERSION, SETTINGS_VERSION));
        root.push(SettingsNode::leaf(
            EL_POINTS_PER_FRAME,
            self.points_per_frame.to_string(),
        ));
        root.push(SettingsNode::leaf(
            EL_FRAMES_PER_SECOND,
            self.frames_per_second().to_string(),
        ));
        root.push(SettingsNode::leaf(
            EL_CONTINUE_FRAMES,
            self.continue_frames.to_string(),
        ));

        let mut lookup = SettingsNode::container(EL_LOOKUP);
        for entry in self.igt_lookup.entries() {
            lookup.push(
                SettingsNode::container(EL_ROW)
                    .with_child(SettingsNode::leaf(EL_MAX_TIME, entry.max_time_ms.to_string()))
                    .with_child(SettingsNode::leaf(EL_POINTS, entry.points.to_string())),
            );
        }
        root.push(lookup);
        root
    }

    /// Change-detection hash, identical to the one saved layouts were stamped with.
    ///
    /// Each lookup row overwrites the running value with
    /// `(hash(max_time) ^ hash(points)) * position`, so with a non-empty
    /// table only the last row decides the result.
    pub fn hash_code(&self) -> i32 {
        let mut hash = SETTINGS_VERSION.legacy_hash()
            ^ self.points_per_frame.legacy_hash()
            ^ self.frames_per_second().legacy_hash()
            ^ self.continue_frames.legacy_hash();

        for (index, entry) in self.igt_lookup.entries().enumerate() {
            let row_hash = entry.max_time_ms.legacy_hash() ^ entry.points.legacy_hash();
            hash = row_hash.wrapping_mul(index as i32 + 1);
        }

        hash
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn non_negative(field: &'static str, value: i32) -> Result<i32> {
    if value < 0 {
        return Err(RtaTbError::InvalidSetting {
            field,
            reason: format!("{} must not be negative", value),
        });
    }
    Ok(value)
}

/// Parse a leaf element; `Ok(None)` when absent
fn read_field<T>(node: &SettingsNode, field: &'static str, valid: impl Fn(&T) -> bool) -> Result<Option<T>>
where
    T: FromStr,
{
    let Some(text) = node.child_text(field) else {
        return Ok(None);
    };
    match text.trim().parse::<T>() {
        Ok(value) if valid(&value) => Ok(Some(value)),
        _ => Err(RtaTbError::MalformedConfiguration {
            field,
            value: text.to_string(),
        }),
    }
}

fn field_or_default<T>(
    node: &SettingsNode,
    field: &'static str,
    default: T,
    valid: impl Fn(&T) -> bool,
) -> T
where
    T: FromStr + Display,
{
    match read_field(node, field, valid) {
        Ok(Some(value)) => value,
        Ok(None) => {
            debug!("{} missing, using {}", field, default);
            default
        }
        Err(e) => {
            warn!("{}; using {}", e, default);
            default
        }
    }
}

fn parse_row(row: &SettingsNode) -> Result<(i32, i32)> {
    let max_time_ms = read_field(row, EL_MAX_TIME, |_: &i32| true)?;
    let points = read_field(row, EL_POINTS, |_: &i32| true)?;
    match (max_time_ms, points) {
        (Some(max_time_ms), Some(points)) => Ok((max_time_ms, points)),
        _ => Err(RtaTbError::MalformedConfiguration {
            field: EL_ROW,
            value: format!("{:?}", row),
        }),
    }
}
