//! Per-chat session storage
//!
//! Sessions live in memory only. Entries expire after a period of inactivity
//! so abandoned conversations do not accumulate.

use crate::flow::state::State;
use moka::future::Cache;
use std::time::Duration;
use tracing::debug;

/// In-memory store mapping a chat id to its conversation state
#[derive(Clone)]
pub struct SessionStore {
    cache: Cache<i64, State>,
}

impl SessionStore {
    /// Creates a new `SessionStore`
    ///
    /// # Arguments
    ///
    /// * `idle_timeout_secs` - Seconds without activity before a session is dropped
    /// * `max_capacity` - Maximum number of sessions kept
    ///
    /// # Examples
    ///
    /// ```
    /// use board_prep_bot::bot::session::SessionStore;
    ///
    /// let store = SessionStore::new(86_400, 100_000);
    /// ```
    #[must_use]
    pub fn new(idle_timeout_secs: u64, max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_idle(Duration::from_secs(idle_timeout_secs))
            .build();

        Self { cache }
    }

    /// Current state for `chat_id`; unknown or expired chats are `State::Ended`
    pub async fn get(&self, chat_id: i64) -> State {
        self.cache.get(&chat_id).await.unwrap_or_default()
    }

    /// Store the state for `chat_id`. Ended sessions are removed.
    pub async fn set(&self, chat_id: i64, state: State) {
        if state.is_active() {
            self.cache.insert(chat_id, state).await;
        } else {
            debug!(chat_id, "Session ended, removing from store");
            self.cache.invalidate(&chat_id).await;
        }
    }

    /// Returns the current number of sessions in the store
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}
