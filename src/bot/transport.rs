//! Outbound side of the transport boundary.

use super::messaging;
use anyhow::Result;
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ChatId;

/// Operations the conversation driver needs from the messaging platform
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Outbound: Send + Sync {
    /// Send plain text
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<()>;

    /// Send text with a reply keyboard listing `options`
    async fn send_text_with_menu(
        &self,
        chat_id: i64,
        text: &str,
        options: &'static [&'static str],
        one_time: bool,
    ) -> Result<()>;
}

/// Telegram implementation of [`Outbound`]
#[derive(Clone)]
pub struct TelegramOutbound {
    bot: Bot,
}

impl TelegramOutbound {
    /// Wrap a bot handle
    #[must_use]
    pub const fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Outbound for TelegramOutbound {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<()> {
        messaging::send_long_message(&self.bot, ChatId(chat_id), text).await
    }

    async fn send_text_with_menu(
        &self,
        chat_id: i64,
        text: &str,
        options: &'static [&'static str],
        one_time: bool,
    ) -> Result<()> {
        let keyboard = messaging::menu_keyboard(options, one_time);
        messaging::send_menu(&self.bot, ChatId(chat_id), text, keyboard).await
    }
}
