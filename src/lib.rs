#![deny(missing_docs)]
//! EasyBoardPrepBot
//!
//! A Telegram bot that asks for the student's standard and subject, then
//! answers their questions with an LLM, tagging each answer with an
//! estimated mark value.

/// Telegram bot implementation
pub mod bot;
/// Configuration management
pub mod config;
/// Conversation flow (state machine, formatting)
pub mod flow;
/// LLM providers
pub mod llm;
/// Log redaction
pub mod logging;
/// Telegram runtime entrypoint
pub mod runner;
/// Utility functions
pub mod utils;
