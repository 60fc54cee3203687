//! Conversation transitions.
//!
//! `transition` is pure: it never touches the network or the session store.
//! The driver in `bot::conversation` executes the returned effects.

use super::question::{extract_question, QuestionInput, IMAGE_RECEIVED};
use super::state::{AnswerRequest, Effect, Event, State};
use super::views;
use crate::config::{STANDARDS, SUBJECTS};

/// Compute the next state and the effects for one inbound event.
///
/// # Examples
///
/// ```
/// use board_prep_bot::flow::machine::transition;
/// use board_prep_bot::flow::state::{Event, State};
///
/// let (next, _) = transition(State::Ended, Event::Begin);
/// assert_eq!(next, State::AwaitingStandard);
/// ```
#[must_use]
pub fn transition(state: State, event: Event) -> (State, Vec<Effect>) {
    match (state, event) {
        (_, Event::Begin) => (State::AwaitingStandard, vec![standards_menu(views::WELCOME)]),
        (_, Event::Cancel) => (State::Ended, vec![Effect::Send(views::CANCELLED.to_string())]),
        (state, Event::Help) => (state, vec![Effect::Send(views::HELP.to_string())]),

        (State::Ended, Event::Text(_) | Event::Image) => (
            State::Ended,
            vec![Effect::Send(views::NOT_STARTED.to_string())],
        ),

        (State::AwaitingStandard, Event::Text(text)) if !looks_like_command(&text) => {
            let effects = vec![subjects_menu(views::standard_selected(&text))];
            (State::AwaitingSubject { standard: text }, effects)
        }
        (State::AwaitingStandard, Event::Text(_) | Event::Image) => (
            State::AwaitingStandard,
            vec![standards_menu(views::repeat_standard())],
        ),

        (State::AwaitingSubject { standard }, Event::Text(text)) if !looks_like_command(&text) => {
            let effects = vec![Effect::Send(views::subject_selected(&text))];
            (
                State::AwaitingQuestion {
                    standard,
                    subject: text,
                },
                effects,
            )
        }
        (State::AwaitingSubject { standard }, Event::Text(_) | Event::Image) => {
            let effects = vec![subjects_menu(views::repeat_subject(&standard))];
            (State::AwaitingSubject { standard }, effects)
        }

        (State::AwaitingQuestion { standard, subject }, Event::Text(text)) => {
            let effects = vec![answer(&standard, &subject, QuestionInput::Text(text))];
            (State::AwaitingQuestion { standard, subject }, effects)
        }
        (State::AwaitingQuestion { standard, subject }, Event::Image) => {
            let effects = vec![
                Effect::Send(IMAGE_RECEIVED.to_string()),
                answer(&standard, &subject, QuestionInput::Image),
            ];
            (State::AwaitingQuestion { standard, subject }, effects)
        }
    }
}

fn standards_menu(text: impl Into<String>) -> Effect {
    Effect::SendMenu {
        text: text.into(),
        options: STANDARDS,
        one_time: true,
    }
}

fn subjects_menu(text: impl Into<String>) -> Effect {
    Effect::SendMenu {
        text: text.into(),
        options: SUBJECTS,
        one_time: true,
    }
}

fn answer(standard: &str, subject: &str, input: QuestionInput) -> Effect {
    Effect::Answer(AnswerRequest {
        standard: standard.to_string(),
        subject: subject.to_string(),
        question: extract_question(input),
    })
}

// Commands are filtered out of the selection steps; only known commands
// reach `transition` as dedicated events.
fn looks_like_command(text: &str) -> bool {
    text.trim_start().starts_with('/')
}
