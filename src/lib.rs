//! Compact relative timestamps ("30s ago", "1h ago", "Jan 15, 2024") for UI surfaces.

pub mod time;
pub mod util;

pub use time::{DateInput, FormatError, FormatOptions, format_relative_time};
