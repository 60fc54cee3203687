//! Conversation driver
//!
//! Glues the pure transition function to the session store, the model
//! provider and the outbound transport.

use super::session::SessionStore;
use super::transport::Outbound;
use crate::flow::format::{format_reply, render_answer};
use crate::flow::machine::transition;
use crate::flow::marks::estimate_marks;
use crate::flow::state::{AnswerRequest, Effect, Event};
use crate::llm::{self, AnswerProvider};
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Drives one event at a time through a chat's conversation
#[derive(Clone)]
pub struct Conversation {
    sessions: SessionStore,
    answers: Arc<dyn AnswerProvider>,
    outbound: Arc<dyn Outbound>,
}

impl Conversation {
    /// Create a driver over the given collaborators
    #[must_use]
    pub fn new(
        sessions: SessionStore,
        answers: Arc<dyn AnswerProvider>,
        outbound: Arc<dyn Outbound>,
    ) -> Self {
        Self {
            sessions,
            answers,
            outbound,
        }
    }

    /// Session store backing this driver
    #[must_use]
    pub const fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Handle one inbound event for `chat_id`.
    ///
    /// The next state is stored before effects run, so a failed send does not
    /// leave the chat stuck on the previous step.
    ///
    /// # Errors
    ///
    /// Returns an error if a message cannot be delivered.
    #[instrument(skip(self, event), fields(event = ?event))]
    pub async fn handle(&self, chat_id: i64, event: Event) -> Result<()> {
        let state = self.sessions.get(chat_id).await;
        let (next, effects) = transition(state.clone(), event);

        if next != state {
            info!(chat_id, from = ?state, to = ?next, "Conversation state changed");
        }
        self.sessions.set(chat_id, next).await;

        for effect in effects {
            self.apply(chat_id, effect).await?;
        }
        Ok(())
    }

    async fn apply(&self, chat_id: i64, effect: Effect) -> Result<()> {
        match effect {
            Effect::Send(text) => self.outbound.send_text(chat_id, &text).await,
            Effect::SendMenu {
                text,
                options,
                one_time,
            } => {
                self.outbound
                    .send_text_with_menu(chat_id, &text, options, one_time)
                    .await
            }
            Effect::Answer(request) => {
                let reply = self.compose_answer(&request).await;
                self.outbound.send_text(chat_id, &reply).await
            }
        }
    }

    /// Estimate marks, fetch the answer and compose the reply for a question.
    ///
    /// Never fails: a provider error is rendered into the answer field.
    pub async fn compose_answer(&self, request: &AnswerRequest) -> String {
        let marks = estimate_marks(&request.question);
        debug!(marks, "Fetching answer");

        let answer = llm::fetch_answer(self.answers.as_ref(), &request.question).await;

        format_reply(
            &request.standard,
            &request.subject,
            &request.question,
            marks,
            &render_answer(&answer),
        )
    }
}
