//! RTA-TB Core - game time engine for "real time minus time bonuses" runs
//!
//! This crate provides the lookup table that maps level times to bonus
//! points, the settings model with its persisted tree layout and change
//! hash, validation for user-typed rows, and the tracker that turns host
//! timer events into game time commands. Python bindings are available via
//! the `python` feature.

pub mod config;
pub mod error;
pub mod lookup;
pub mod timer;
pub mod validation;

#[cfg(feature = "python")]
mod python;

pub use crate::config::{FrameRate, Settings, SettingsNode};
pub use crate::error::{Result, RtaTbError};
pub use crate::lookup::{LookupEntry, LookupTable};
pub use crate::timer::{GameTimeTracker, HostCommand, TimerEvent};

#[cfg(feature = "python")]
pub use crate::python::PySettings;
