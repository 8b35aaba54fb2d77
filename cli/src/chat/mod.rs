//! # Chatbot Conversation Logic
//!
//! File: cli/src/chat/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Holds the transport-independent part of the chatbot: choosing a reply for a
//! message. Both the HTTP handler (`commands::serve`) and the terminal
//! commands (`commands::reply`, `commands::chat`) go through this module, so
//! every surface answers a message identically.
//!
pub mod reply;

pub use reply::{generate_reply, Reply};
