//! # Chatbot Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` and runs the compiled `chatbot` binary through
//! `assert_cmd`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;

/// The three canned replies, as the binary prints them.
pub const GREETING_REPLY: &str = "Hello! How can I assist you today?";
pub const HELP_REPLY: &str = "Sure, please tell me what you need help with.";
pub const FALLBACK_REPLY: &str = "I'm not sure how to respond to that. Could you rephrase?";

/// # Get Chatbot Command (`chatbot_cmd`)
///
/// Creates an `assert_cmd::Command` for the `chatbot` binary built for this
/// test run. `PORT` and `RUST_LOG` are cleared so the host environment cannot
/// change the outcome.
///
/// ## Panics
/// Panics if the `chatbot` binary cannot be found via `Command::cargo_bin`.
pub fn chatbot_cmd() -> Command {
    let mut cmd = Command::cargo_bin("chatbot").expect("Failed to find chatbot binary for testing");
    cmd.env_remove("PORT").env_remove("RUST_LOG");
    cmd
}
