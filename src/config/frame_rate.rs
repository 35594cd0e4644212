//! Frame rate selection

use crate::error::{RtaTbError, Result};

pub const FPS_NTSC_FULL: f64 = 59.94;
pub const FPS_PAL_FULL: f64 = 50.0;
pub const FPS_NTSC_HALF: f64 = 29.97;
pub const FPS_PAL_HALF: f64 = 25.0;
pub const FPS_PC: f64 = 60.0;
/// Sega Genesis / Master System
pub const FPS_GEN_SMS: f64 = 59.9228;

/// Frame rate the game's timer ticks at
#[derive(Debug, Clone, Copy)]
pub enum FrameRate {
    NtscFull,
    PalFull,
    NtscHalf,
    PalHalf,
    Pc,
    GenesisMasterSystem,
    Custom(f64),
}

impl FrameRate {
    /// Every preset, in the order a settings surface lists them
    pub const PRESETS: [FrameRate; 6] = [
        FrameRate::NtscFull,
        FrameRate::PalFull,
        FrameRate::NtscHalf,
        FrameRate::PalHalf,
        FrameRate::Pc,
        FrameRate::GenesisMasterSystem,
    ];

    /// Frames per second
    #[inline]
    pub fn fps(self) -> f64 {
        match self {
            FrameRate::NtscFull => FPS_NTSC_FULL,
            FrameRate::PalFull => FPS_PAL_FULL,
            FrameRate::NtscHalf => FPS_NTSC_HALF,
            FrameRate::PalHalf => FPS_PAL_HALF,
            FrameRate::Pc => FPS_PC,
            FrameRate::GenesisMasterSystem => FPS_GEN_SMS,
            FrameRate::Custom(fps) => fps,
        }
    }

    /// Map a raw fps value onto a preset when it matches one exactly
    pub fn from_fps(fps: f64) -> Self {
        Self::PRESETS
            .into_iter()
            .find(|preset| preset.fps() == fps)
            .unwrap_or(FrameRate::Custom(fps))
    }

    /// Validated custom rate; must be finite and above zero
    pub fn custom(fps: f64) -> Result<Self> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(RtaTbError::InvalidSetting {
                field: "FramesPerSecond",
                reason: format!("{} is not a positive frame rate", fps),
            });
        }
        Ok(Self::from_fps(fps))
    }

    pub fn is_custom(self) -> bool {
        matches!(self, FrameRate::Custom(_))
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        FrameRate::GenesisMasterSystem
    }
}

impl PartialEq for FrameRate {
    fn eq(&self, other: &Self) -> bool {
        self.fps() == other.fps()
    }
}
