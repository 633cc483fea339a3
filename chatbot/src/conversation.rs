//! In-memory [`ConversationView`]: the message list and input field as plain state.

use async_trait::async_trait;
use chat_core::{ChatError, ConversationView, QuickReply, Result, Turn};
use std::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

/// One row of the rendered list.
#[derive(Debug, Clone)]
pub enum Entry {
    Turn(Turn),
    /// Transient placeholder shown while a reply is pending.
    Typing(String),
}

#[derive(Debug, Default)]
struct State {
    entries: Vec<Entry>,
    input: String,
}

/// Append-only conversation kept in memory. Closing/reopening a widget does not clear it;
/// dropping the log does.
#[derive(Debug, Default)]
pub struct ConversationLog {
    state: Mutex<State>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|e| ChatError::View(format!("conversation state poisoned: {}", e)))
    }

    /// Rendered turns in display order (typing indicators excluded).
    pub fn turns(&self) -> Result<Vec<Turn>> {
        let state = self.lock()?;
        Ok(state
            .entries
            .iter()
            .filter_map(|e| match e {
                Entry::Turn(t) => Some(t.clone()),
                Entry::Typing(_) => None,
            })
            .collect())
    }

    /// Every row, typing indicators included.
    pub fn entries(&self) -> Result<Vec<Entry>> {
        Ok(self.lock()?.entries.clone())
    }

    /// Number of typing indicators currently shown.
    pub fn typing_count(&self) -> Result<usize> {
        Ok(self
            .lock()?
            .entries
            .iter()
            .filter(|e| matches!(e, Entry::Typing(_)))
            .count())
    }

    /// Simulates the visitor typing into the input field.
    pub fn set_input(&self, text: &str) -> Result<()> {
        self.lock()?.input = text.to_string();
        Ok(())
    }

    pub fn input(&self) -> Result<String> {
        Ok(self.lock()?.input.clone())
    }
}

#[async_trait]
impl ConversationView for ConversationLog {
    async fn append_turn(&self, turn: &Turn) -> Result<()> {
        let mut state = self.lock()?;
        state.entries.push(Entry::Turn(turn.clone()));
        debug!(turn_id = %turn.id, author = ?turn.author, rows = state.entries.len(), "Turn appended");
        Ok(())
    }

    async fn clear_input(&self) -> Result<()> {
        self.lock()?.input.clear();
        Ok(())
    }

    async fn show_typing(&self) -> Result<String> {
        let id = format!("typing-{}", Uuid::new_v4());
        self.lock()?.entries.push(Entry::Typing(id.clone()));
        Ok(id)
    }

    async fn remove_typing(&self, indicator_id: &str) -> Result<()> {
        let mut state = self.lock()?;
        let pos = state
            .entries
            .iter()
            .position(|e| matches!(e, Entry::Typing(id) if id == indicator_id))
            .ok_or_else(|| ChatError::TypingNotFound(indicator_id.to_string()))?;
        state.entries.remove(pos);
        Ok(())
    }

    async fn attach_quick_replies(&self, turn_id: &str, replies: &[QuickReply]) -> Result<()> {
        let mut state = self.lock()?;
        let turn = state
            .entries
            .iter_mut()
            .find_map(|e| match e {
                Entry::Turn(t) if t.id == turn_id => Some(t),
                _ => None,
            })
            .ok_or_else(|| ChatError::TurnNotFound(turn_id.to_string()))?;
        turn.quick_replies.extend_from_slice(replies);
        Ok(())
    }
}
