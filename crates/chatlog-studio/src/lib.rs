//! Chatlog Studio library
//!
//! Parses WhatsApp chat exports into messages and derives activity
//! statistics from them. This exposes the internal modules for the CLI
//! and for testing.
//!
//! ```
//! use chatlog_studio::aggregator::{summary_stats, top_senders};
//! use chatlog_studio::parser::parse;
//!
//! let text = "[1/2/24, 9:15:00 AM] Ana: morning\n1/2/24, 21:40 - Bo: night";
//! let messages = parse(text);
//!
//! assert_eq!(summary_stats(&messages).total_messages, 2);
//! assert_eq!(top_senders(&messages, 5).len(), 2);
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
