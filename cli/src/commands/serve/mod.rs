//! # Chatbot HTTP Service
//!
//! File: cli/src/commands/serve/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module runs the chat service: a single `POST /chat` endpoint that takes
//! `{"message": "..."}` and answers `{"reply": "..."}` with status `200`.
//!
//! ## Architecture
//!
//! The module is organized into three components:
//! - `config.rs`: Argument, environment, and config file merging
//! - `handlers.rs`: Permissive request parsing and the `/chat` handler
//! - `server_logic.rs`: Router construction, binding, and graceful shutdown
//!
//! ## Examples
//!
//! ```bash
//! # Listen on 0.0.0.0:8080
//! chatbot serve
//!
//! # Port from the environment, as container platforms provide it
//! PORT=3000 chatbot serve
//!
//! # Talk to it
//! curl -X POST -H 'Content-Type: application/json' \
//!      -d '{"message": "Hi there"}' http://localhost:8080/chat
//! ```
//!
use crate::core::error::Result;
use tracing::info;

pub use config::ServeArgs;

/// Handles configuration loading and merging for the chat server.
pub mod config;

/// The `/chat` request handler and its payload types.
pub mod handlers;

/// Contains the core Axum-based HTTP server implementation.
pub mod server_logic;

/// # Handle Serve Command (`handle_serve`)
///
/// Entry point for `chatbot serve` (and for `chatbot` with no subcommand).
/// Resolves the effective configuration and runs the server until shutdown.
pub async fn handle_serve(args: ServeArgs) -> Result<()> {
    info!("Handling serve command with args: {:?}", args);

    let config = config::load_config(args)?;
    info!("Effective server config: {:?}", config);

    server_logic::run_server(config).await
}
