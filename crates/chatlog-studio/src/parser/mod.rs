//! Transcript parsing and the message record.
//!
//! This module handles:
//! - Matching bracketed (iOS) and dashed (Android) header lines
//! - Folding continuation lines into the open message
//! - Normalizing dates and 12/24-hour times
//! - Defining the message record handed to the aggregator

pub mod schema;
pub mod timestamp;
pub mod transcript;

// Re-export main types
pub use schema::{Message, ParseStats, ParsedTranscript};
pub use timestamp::{parse_hour, resolve_date};
pub use transcript::{parse, parse_with_stats};
