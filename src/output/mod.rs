pub mod formatter;

pub use formatter::{Outcome, Summary, format_summary};
