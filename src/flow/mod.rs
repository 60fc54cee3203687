//! Conversation flow: state, transitions and reply composition.
//!
//! Everything here is free of I/O so it can be tested without Telegram or
//! a model provider.

/// Reply composition and answer rendering
pub mod format;
/// Pure transition function
pub mod machine;
/// Mark estimate from question length
pub mod marks;
/// Question extraction from text or image messages
pub mod question;
/// Conversation state, events and effects
pub mod state;
/// User-facing texts
pub mod views;
