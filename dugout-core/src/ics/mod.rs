//! ICS feed parsing.

mod parse;

pub use parse::{ParsedFeed, SkippedEvent, parse_feed};
