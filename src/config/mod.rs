//! Configuration module
//!
//! This module holds the game time settings, their serialized tree form and
//! the legacy change-detection hash.

mod document;
mod frame_rate;
pub mod hash;
mod settings;

#[cfg(test)]
mod property_tests;

pub use document::*;
pub use frame_rate::*;
pub use hash::LegacyHash;
pub use settings::*;
