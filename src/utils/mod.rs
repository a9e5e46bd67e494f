//! Utility functions

mod m3u;
pub mod paths;
pub mod pattern;

pub use m3u::{parse_entries, render_m3u};
pub use paths::{normalize_dir, to_relative};
pub use pattern::PathPattern;
