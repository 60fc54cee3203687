use crate::bot::conversation::Conversation;
use crate::flow::state::Event;
use anyhow::Result;
use std::sync::Arc;
use teloxide::{prelude::*, utils::command::BotCommands};
use tracing::info;

/// Supported commands for the bot
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    /// Begin (or restart) the standard/subject selection
    #[command(description = "Choose your standard and subject.")]
    Start,
    /// End the current session
    #[command(description = "End the current session.")]
    Cancel,
    /// Show the command list
    #[command(description = "Show available commands.")]
    Help,
}

impl From<Command> for Event {
    fn from(cmd: Command) -> Self {
        match cmd {
            Command::Start => Self::Begin,
            Command::Cancel => Self::Cancel,
            Command::Help => Self::Help,
        }
    }
}

/// Classify a non-command message.
///
/// Photos take precedence over text so that a captioned photo is still
/// treated as an image. Returns `None` for message kinds the flow ignores.
#[must_use]
pub fn classify_message(msg: &Message) -> Option<Event> {
    if msg.photo().is_some() {
        return Some(Event::Image);
    }
    msg.text().map(|text| Event::Text(text.to_string()))
}

// Helper function to get user name from Message
fn get_user_name(msg: &Message) -> String {
    if let Some(ref user) = msg.from {
        if let Some(ref username) = user.username {
            return username.clone();
        }
        if !user.first_name.is_empty() {
            return user.first_name.clone();
        }
    }
    "Unknown".to_string()
}

/// Command handler
///
/// # Errors
///
/// Returns an error if the reply cannot be sent.
pub async fn command(msg: Message, cmd: Command, conversation: Arc<Conversation>) -> Result<()> {
    if cmd == Command::Start {
        info!(
            "User {} ({}) initiated /start command.",
            msg.chat.id.0,
            get_user_name(&msg)
        );
    }
    conversation.handle(msg.chat.id.0, cmd.into()).await
}

/// Text and photo handler
///
/// # Errors
///
/// Returns an error if the reply cannot be sent.
pub async fn message(msg: Message, conversation: Arc<Conversation>) -> Result<()> {
    let Some(event) = classify_message(&msg) else {
        return Ok(());
    };
    conversation.handle(msg.chat.id.0, event).await
}
