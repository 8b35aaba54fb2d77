//! # Reply Generator
//!
//! File: cli/src/chat/reply.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Maps an incoming message to one of three canned replies. The message is
//! lowercased and trimmed, then checked for keywords in a fixed order:
//! 1. `"hello"` or `"hi"` anywhere in the text: a greeting
//! 2. `"help"` anywhere in the text: an offer to help
//! 3. anything else (including the empty string): a request to rephrase
//!
//! Matching is by substring, so `"this"` counts as a greeting and `"which help"`
//! never reaches the help branch.
//!
//! ## Examples
//!
//! ```rust
//! assert_eq!(generate_reply("Hi there"), "Hello! How can I assist you today?");
//! assert_eq!(Reply::classify("I need HELP"), Reply::Help);
//! ```
//!
use std::fmt;

/// Reply to messages containing "hello" or "hi".
pub const GREETING_REPLY: &str = "Hello! How can I assist you today?";
/// Reply to messages containing "help".
pub const HELP_REPLY: &str = "Sure, please tell me what you need help with.";
/// Reply to everything else.
pub const FALLBACK_REPLY: &str = "I'm not sure how to respond to that. Could you rephrase?";

/// The category a message falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Greeting,
    Help,
    Fallback,
}

impl Reply {
    /// Classifies a raw, un-normalized message.
    ///
    /// Total over all inputs; the greeting keywords win over "help".
    pub fn classify(message: &str) -> Self {
        let normalized = message.to_lowercase();
        let normalized = normalized.trim();

        if normalized.contains("hello") || normalized.contains("hi") {
            Reply::Greeting
        } else if normalized.contains("help") {
            Reply::Help
        } else {
            Reply::Fallback
        }
    }

    /// The canned text sent back for this category. Never empty.
    pub fn text(self) -> &'static str {
        match self {
            Reply::Greeting => GREETING_REPLY,
            Reply::Help => HELP_REPLY,
            Reply::Fallback => FALLBACK_REPLY,
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Returns the canned reply for `message`.
pub fn generate_reply(message: &str) -> &'static str {
    Reply::classify(message).text()
}

// ===============================
// Inline Unit Tests
// ===============================
