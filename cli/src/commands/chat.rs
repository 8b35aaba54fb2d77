//! # Interactive Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A REPL for trying the chatbot from a terminal. Each line read from stdin is
//! answered with the same reply the HTTP endpoint would give. Typing `bye`
//! (any case) or closing stdin ends the session.
//!
//! ```text
//! Chat with the bot! Type 'bye' to quit.
//! You: hello
//! Bot: Hello! How can I assist you today?
//! You: bye
//! Bot: Goodbye!
//! ```
//!
use crate::chat::generate_reply;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(about = "Chat with the bot interactively in the terminal")]
pub struct ChatArgs {}

/// # Handle Chat Command (`handle_chat`)
///
/// Runs the REPL on stdin/stdout. Terminal I/O is blocking, so the loop runs
/// on Tokio's blocking thread pool.
pub async fn handle_chat(_args: ChatArgs) -> Result<()> {
    info!("Starting interactive chat session");

    tokio::task::spawn_blocking(|| {
        let stdin = io::stdin();
        let stdout = io::stdout();
        run_repl(stdin.lock(), stdout.lock())
    })
    .await
    .context("Chat session task failed")?
}

/// Reads lines from `input` and writes replies to `output` until `bye` or EOF.
pub fn run_repl<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<()> {
    writeln!(output, "Chat with the bot! Type 'bye' to quit.")?;

    loop {
        write!(output, "You: ")?;
        output.flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;

        if read == 0 {
            // EOF: end the prompt line so the shell starts on a fresh one.
            writeln!(output)?;
            debug!("Input closed, ending chat session");
            break;
        }

        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("bye") {
            writeln!(output, "Bot: Goodbye!")?;
            break;
        }

        writeln!(output, "Bot: {}", generate_reply(trimmed))?;
    }

    Ok(())
}
