//! # Chatbot Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `chatbot` binary.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//!
//! Running `chatbot` with no command starts the HTTP service, reading the
//! port from `PORT` (default `8080`), so the binary can be used directly as a
//! container entry point.
//!
//! ## Examples
//!
//! ```bash
//! # Start the service on 0.0.0.0:8080
//! chatbot
//!
//! # Same, with request logging
//! chatbot -v serve --port 9000
//!
//! # Try a message without a server
//! chatbot reply hello there
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod chat; // Reply generation shared by every command.
mod commands; // Command handlers (serve, reply, chat).
mod core; // Core infrastructure (errors).

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "chatbot",
    about = "💬 chatbot: a tiny HTTP service that answers messages with canned replies",
    long_about = "Runs a POST /chat endpoint that replies to greetings and requests for help.\n\
                  With no command, `serve` runs with its defaults.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "s")]
    Serve(commands::serve::ServeArgs),
    #[command(alias = "r")]
    Reply(commands::reply::ReplyArgs),
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command = match cli.command {
        Some(command) => command,
        // Parse an empty `serve` so its `PORT` env fallback still applies.
        None => match default_serve_args() {
            Ok(args) => Commands::Serve(args),
            Err(e) => e.exit(),
        },
    };

    let command_result = match command {
        Commands::Serve(args) => commands::serve::handle_serve(args).await,
        Commands::Reply(args) => commands::reply::handle_reply(args).await,
        Commands::Chat(args) => commands::chat::handle_chat(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// `serve` arguments as if `chatbot serve` had been typed with no flags.
fn default_serve_args() -> Result<commands::serve::ServeArgs, clap::Error> {
    commands::serve::ServeArgs::try_parse_from(["serve"])
}
