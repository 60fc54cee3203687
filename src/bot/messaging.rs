//! Common messaging utilities for Telegram bot.
//!
//! Splits long replies to fit Telegram's limit and retries transient send
//! failures.

use crate::config::TELEGRAM_MESSAGE_LIMIT;
use crate::utils;
use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::{ChatId, KeyboardButton, KeyboardMarkup};

/// Build a single-row reply keyboard with one button per option.
///
/// # Examples
///
/// ```
/// use board_prep_bot::bot::messaging::menu_keyboard;
/// use board_prep_bot::config::STANDARDS;
///
/// let keyboard = menu_keyboard(STANDARDS, true);
/// assert_eq!(keyboard.keyboard.len(), 1);
/// assert_eq!(keyboard.keyboard[0].len(), STANDARDS.len());
/// ```
#[must_use]
pub fn menu_keyboard(options: &[&str], one_time: bool) -> KeyboardMarkup {
    let row: Vec<KeyboardButton> = options.iter().map(|o| KeyboardButton::new(*o)).collect();
    let keyboard = KeyboardMarkup::new(vec![row]).resize_keyboard();
    if one_time {
        keyboard.one_time_keyboard()
    } else {
        keyboard
    }
}

/// Sends a long message by splitting it into multiple parts.
///
/// # Errors
///
/// Returns an error if any part fails to send after retries.
pub async fn send_long_message(bot: &Bot, chat_id: ChatId, text: &str) -> Result<()> {
    for part in utils::split_long_message(text, TELEGRAM_MESSAGE_LIMIT) {
        utils::retry_telegram_operation(|| async {
            bot.send_message(chat_id, part.clone())
                .await
                .map_err(|e| anyhow::anyhow!("Telegram send error: {e}"))
        })
        .await?;
    }

    Ok(())
}

/// Sends a message together with a reply keyboard.
///
/// # Errors
///
/// Returns an error if the message fails to send after retries.
pub async fn send_menu(bot: &Bot, chat_id: ChatId, text: &str, keyboard: KeyboardMarkup) -> Result<()> {
    utils::retry_telegram_operation(|| async {
        bot.send_message(chat_id, text.to_string())
            .reply_markup(keyboard.clone())
            .await
            .map_err(|e| anyhow::anyhow!("Telegram send error: {e}"))
    })
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SUBJECTS;

    #[test]
    fn test_menu_keyboard_one_time() {
        let keyboard = menu_keyboard(SUBJECTS, true);
        assert!(keyboard.one_time_keyboard);
        assert_eq!(keyboard.keyboard[0][3].text, "Social Science");
    }

    #[test]
    fn test_menu_keyboard_persistent() {
        let keyboard = menu_keyboard(SUBJECTS, false);
        assert!(!keyboard.one_time_keyboard);
    }
}
