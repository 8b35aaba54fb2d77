//! # One-Shot Reply Command
//!
//! File: cli/src/commands/reply.rs
//! Author: Christi Mahu
//!
//! Prints the reply the server would send for a message, without starting it.
//!
//! ```bash
//! chatbot reply I need help
//! # Sure, please tell me what you need help with.
//! ```
//!
use crate::chat::Reply;
use crate::core::error::Result;
use clap::Parser;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(about = "Print the canned reply for a message and exit")]
pub struct ReplyArgs {
    /// The message to answer. Multiple words are joined with spaces.
    pub message: Vec<String>,
}

impl ReplyArgs {
    fn message(&self) -> String {
        self.message.join(" ")
    }
}

pub async fn handle_reply(args: ReplyArgs) -> Result<()> {
    let message = args.message();
    let reply = Reply::classify(&message);
    debug!("Message {:?} classified as {:?}", message, reply);

    println!("{}", reply);
    Ok(())
}
