use serde::{Deserialize, Serialize};

/// Represents the current state of a chat's conversation
///
/// Selections live inside the variants, so a subject can only exist once a
/// standard has been chosen.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum State {
    /// No active conversation (before `/start` or after `/cancel`)
    #[default]
    Ended,
    /// Standards menu shown, waiting for the user's pick
    AwaitingStandard,
    /// Standard chosen, waiting for the subject
    AwaitingSubject {
        /// Standard exactly as the user sent it
        standard: String,
    },
    /// Both selections made; every text or image is treated as a question
    AwaitingQuestion {
        /// Standard exactly as the user sent it
        standard: String,
        /// Subject exactly as the user sent it
        subject: String,
    },
}

impl State {
    /// Selected standard, if any
    #[must_use]
    pub fn standard(&self) -> Option<&str> {
        match self {
            Self::AwaitingSubject { standard } | Self::AwaitingQuestion { standard, .. } => {
                Some(standard)
            }
            Self::Ended | Self::AwaitingStandard => None,
        }
    }

    /// Selected subject, if any
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        match self {
            Self::AwaitingQuestion { subject, .. } => Some(subject),
            _ => None,
        }
    }

    /// Whether a conversation is in progress
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::Ended)
    }
}

/// Inbound message, already classified by the transport layer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// `/start`
    Begin,
    /// `/cancel`
    Cancel,
    /// `/help`
    Help,
    /// Plain text message
    Text(String),
    /// Photo attachment
    Image,
}

/// Instruction produced by a transition, executed by the driver
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Send plain text
    Send(String),
    /// Send text with a reply keyboard of options
    SendMenu {
        /// Message text
        text: String,
        /// One button per option, in order
        options: &'static [&'static str],
        /// Hide the keyboard after one press
        one_time: bool,
    },
    /// Fetch an answer for `question` and send the composed reply
    Answer(AnswerRequest),
}

/// Everything the formatter needs besides the answer itself
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerRequest {
    /// Selected standard
    pub standard: String,
    /// Selected subject
    pub subject: String,
    /// Question text sent to the model
    pub question: String,
}
