//! IGT lookup table module
//!
//! This module holds the ordered max-time -> bonus-points table and the
//! quantization rules used when a seconds value becomes a table key.

pub mod quantize;
mod table;


pub use quantize::*;
pub use table::*;
