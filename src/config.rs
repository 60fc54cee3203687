//! Configuration and settings management
//!
//! Loads settings from environment variables (and optional config files) and
//! defines the static option lists offered to the user.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Application settings loaded from environment variables
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Telegram Bot API token
    pub bot_token: String,

    /// `OpenAI` API key
    pub openai_api_key: String,

    /// Chat model used to answer questions
    #[serde(default = "default_openai_model")]
    pub openai_model: String,

    /// Base URL of an OpenAI-compatible API
    pub openai_api_base: Option<String>,

    /// Seconds of inactivity after which a session is forgotten
    #[serde(default = "default_session_idle_timeout_secs")]
    pub session_idle_timeout_secs: u64,

    /// Maximum number of sessions tracked at once
    #[serde(default = "default_session_max_capacity")]
    pub session_max_capacity: u64,
}

fn default_openai_model() -> String {
    DEFAULT_MODEL.to_string()
}

const fn default_session_idle_timeout_secs() -> u64 {
    SESSION_IDLE_TIMEOUT_SECS
}

const fn default_session_max_capacity() -> u64 {
    SESSION_MAX_CAPACITY
}

impl Settings {
    /// Create new settings by loading from environment and files
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use board_prep_bot::config::Settings;
    ///
    /// let settings = Settings::new().expect("Failed to load configuration");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if loading fails or a required secret is
    /// missing or blank.
    pub fn new() -> Result<Self, ConfigError> {
        let settings: Self = build_config()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject blank secrets that made it through deserialization
    /// (e.g. `BOT_TOKEN="  "` in a config file).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` naming the first blank field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot_token.trim().is_empty() {
            return Err(ConfigError::Message("BOT_TOKEN must not be empty".into()));
        }
        if self.openai_api_key.trim().is_empty() {
            return Err(ConfigError::Message(
                "OPENAI_API_KEY must not be empty".into(),
            ));
        }
        if self.openai_model.trim().is_empty() {
            return Err(ConfigError::Message("OPENAI_MODEL must not be empty".into()));
        }
        Ok(())
    }
}

/// Build the layered configuration source.
///
/// # Errors
///
/// Returns a `ConfigError` if one of the sources cannot be read.
pub fn build_config() -> Result<Config, ConfigError> {
    let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    Config::builder()
        // Start off by merging in the "default" configuration file
        .add_source(File::with_name("config/default").required(false))
        // Add in the current environment file
        .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
        // Add in a local configuration file
        // This file shouldn't be checked into git
        .add_source(File::with_name("config/local").required(false))
        // Eg.. `APP_OPENAI_MODEL=gpt-4o ./target/app` would set the `openai_model` key
        .add_source(Environment::with_prefix("APP").separator("__"))
        // Plain environment variables: BOT_TOKEN, OPENAI_API_KEY, ...
        // ignore_empty treats empty env vars as unset
        .add_source(Environment::default().ignore_empty(true))
        .build()
}

/// Academic standards offered in the first menu
pub const STANDARDS: &[&str] = &["Class 9", "Class 10", "Class 11", "Class 12"];

/// Subjects offered in the second menu
pub const SUBJECTS: &[&str] = &["Science", "Maths", "English", "Social Science"];

/// Default model for answering questions
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

// Session store configuration
/// Idle time before a session is evicted (24 hours)
pub const SESSION_IDLE_TIMEOUT_SECS: u64 = 86_400;
/// Maximum number of sessions kept in memory
pub const SESSION_MAX_CAPACITY: u64 = 100_000;

// Telegram API retry configuration
/// Maximum retries for a single Telegram API call
pub const TELEGRAM_API_MAX_RETRIES: usize = 3;
/// Initial backoff between Telegram API retries
pub const TELEGRAM_API_INITIAL_BACKOFF_MS: u64 = 500;
/// Upper bound for the backoff between Telegram API retries
pub const TELEGRAM_API_MAX_BACKOFF_MS: u64 = 4_000;

/// Maximum message length for Telegram with safety margin.
/// Telegram's official limit is 4096.
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4000;
