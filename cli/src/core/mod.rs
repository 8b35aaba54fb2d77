//! # Chatbot Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared infrastructure used by the command modules. Currently this is only
//! the error handling layer:
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ```rust
//! use crate::core::error::{ChatbotError, Result};
//! ```
//!
pub mod error;
