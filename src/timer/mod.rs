//! Game time module
//!
//! Tally arithmetic and the event-driven tracker that replaces direct
//! host timer hooks.

mod tally;
mod tracker;


pub use tally::*;
pub use tracker::*;
