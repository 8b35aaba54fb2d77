//! # Chatbot Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Aggregates the top-level commands of the `chatbot` binary so `main.rs` can
//! route to them. Each command defines its own clap arguments struct and an
//! async `handle_*` function.
//!
//! ## Commands
//!
//! - `serve`: Run the HTTP chat service (the default when no command is given)
//! - `reply`: Print the reply for a single message
//! - `chat`: Interactive terminal session
//!

/// Interactive REPL against the reply generator.
pub mod chat;
/// One-shot reply for a message given on the command line.
pub mod reply;
/// The HTTP chat service. Includes configuration, handlers, and server logic.
pub mod serve;
