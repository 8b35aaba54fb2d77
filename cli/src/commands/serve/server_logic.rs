//! # Chatbot HTTP Server Implementation
//!
//! File: cli/src/commands/serve/server_logic.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the HTTP server behind `chatbot serve`:
//! - A single `POST /chat` route backed by `handlers::chat`
//! - Request/response tracing
//! - Optional permissive CORS
//! - Graceful shutdown on Ctrl+C or SIGTERM
//!
//! ## Architecture
//!
//! The server implementation uses Axum and follows these steps:
//! 1. Build the Axum router with its middleware (`create_app`)
//! 2. Bind a TCP listener on the configured host and port
//! 3. Print connection information
//! 4. Serve until a shutdown signal arrives
//!
//! ## Examples
//!
//! ```rust
//! let config = config::load_config(args)?;
//! server_logic::run_server(config).await?;
//! ```
//!
use super::config::ServerConfig;
use super::handlers;
use crate::core::error::{ChatbotError, Result};
use axum::{extract::DefaultBodyLimit, routing::post, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

/// # Run HTTP Server (`run_server`)
///
/// Binds the listener described by `config` and serves the chat application
/// until a shutdown signal is received.
///
/// ## Errors
///
/// Returns `ChatbotError::Bind` if the address cannot be bound (port in use,
/// insufficient permissions) and `ChatbotError::Server` if Axum fails while serving.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let addr = config.socket_addr();

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ChatbotError::Bind { addr, source })?;

    // The OS picks the port when 0 is requested; report the real one.
    let local_addr = listener.local_addr().unwrap_or(addr);

    let app = create_app(&config);

    println!("\n=================================================================");
    println!("💬 Chat endpoint:     POST http://localhost:{}/chat", local_addr.port());
    println!("⚙️  Binding to address: {}", local_addr);
    println!("🔒 CORS enabled:      {}", config.enable_cors);
    println!("=================================================================\n");

    info!("Starting chat server on {}", local_addr);
    println!("Server starting! Press Ctrl+C to stop.");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ChatbotError::Server(e.to_string()))?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// # Handle Shutdown Signal (`shutdown_signal`)
///
/// Resolves when Ctrl+C or (on Unix) SIGTERM is received. Used with
/// `with_graceful_shutdown` so in-flight requests finish before exit.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// # Create Axum Application (`create_app`)
///
/// Builds the router: `POST /chat` plus tracing and (optionally) CORS layers.
/// Axum's default 2 MB body limit is lifted on `/chat`; see `handlers::MAX_BODY_BYTES`.
/// Other methods on `/chat` get `405 Method Not Allowed`; other paths `404`.
pub fn create_app(config: &ServerConfig) -> Router {
    let cors_layer = if config.enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new() // No allowed origins, so no CORS headers are added.
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(true))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        // The handler enforces its own body limit and never rejects.
        .route(
            "/chat",
            post(handlers::chat).layer(DefaultBodyLimit::disable()),
        )
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(cors_layer),
        )
}

// --- Unit Tests ---
