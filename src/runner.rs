use crate::bot::conversation::Conversation;
use crate::bot::handlers::{self, Command};
use crate::bot::session::SessionStore;
use crate::bot::transport::TelegramOutbound;
use crate::config::Settings;
use crate::llm::OpenAiProvider;
use std::sync::Arc;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{error, info, warn};

/// Run the Telegram bot until interrupted.
pub async fn run_bot(settings: Arc<Settings>) {
    let bot = Bot::new(settings.bot_token.clone());

    let provider = Arc::new(OpenAiProvider::from_settings(&settings));
    info!("LLM provider initialized (model: {}).", provider.model());

    let sessions = init_sessions(&settings);
    let conversation = Arc::new(Conversation::new(
        sessions,
        provider,
        Arc::new(TelegramOutbound::new(bot.clone())),
    ));

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!("Failed to register bot commands: {}", e);
    }

    let handler = setup_handler();

    info!("Bot is running...");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![conversation])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

fn init_sessions(settings: &Settings) -> SessionStore {
    info!(
        "Initializing SessionStore (idle timeout: {}s, max_size: {})",
        settings.session_idle_timeout_secs, settings.session_max_capacity
    );
    SessionStore::new(
        settings.session_idle_timeout_secs,
        settings.session_max_capacity,
    )
}

fn setup_handler() -> UpdateHandler<teloxide::RequestError> {
    Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(
            dptree::filter(|msg: Message| msg.text().is_some() || msg.photo().is_some())
                .endpoint(handle_message),
        )
}

async fn handle_command(
    msg: Message,
    cmd: Command,
    conversation: Arc<Conversation>,
) -> Result<(), teloxide::RequestError> {
    if let Err(e) = handlers::command(msg, cmd, conversation).await {
        error!("Command error: {}", e);
    }
    respond(())
}

async fn handle_message(
    msg: Message,
    conversation: Arc<Conversation>,
) -> Result<(), teloxide::RequestError> {
    if let Err(e) = Box::pin(handlers::message(msg, conversation)).await {
        error!("Message handler error: {}", e);
    }
    respond(())
}
