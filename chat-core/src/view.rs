//! Conversation view abstraction: the seam between the assistant and whatever renders it.
//!
//! [`ConversationView`] is shell-agnostic; the chatbot crate ships an in-memory implementation
//! and the CLI renders to a terminal.

use crate::error::Result;
use crate::types::{QuickReply, Turn};
use async_trait::async_trait;

/// Message list plus input field owned by the UI shell. Turns are append-only; typing
/// indicators are transient placeholders removed by id.
#[async_trait]
pub trait ConversationView: Send + Sync {
    /// Appends a rendered turn at the end of the message list.
    async fn append_turn(&self, turn: &Turn) -> Result<()>;
    /// Clears the shell's input field.
    async fn clear_input(&self) -> Result<()>;
    /// Shows a typing indicator and returns its id (for later `remove_typing`).
    async fn show_typing(&self) -> Result<String>;
    /// Removes a typing indicator previously returned by `show_typing`.
    async fn remove_typing(&self, indicator_id: &str) -> Result<()>;
    /// Attaches quick-reply buttons to an already-appended turn.
    async fn attach_quick_replies(&self, turn_id: &str, replies: &[QuickReply]) -> Result<()>;
}
