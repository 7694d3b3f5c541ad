//! Rendering of ranked search results as timeline text, project-grouped text, or JSON

pub mod formatter;
pub mod timestamps;

pub use formatter::{FormatOptions, NO_RESULTS, format_results};
pub use timestamps::{DisplayZone, format_date, format_time, parse_time_zone};
