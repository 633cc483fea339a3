//! Core types: turn author, turn, and quick reply.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Author {
    User,
    Bot,
}

/// A preset follow-up the shell renders as a button; activating it sends `message` as user text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickReply {
    pub label: String,
    pub message: String,
}

impl QuickReply {
    pub fn new(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            message: message.into(),
        }
    }
}

/// One rendered unit of the conversation (user message or bot reply).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub id: String,
    pub author: Author,
    /// Rendered as-is, newlines preserved.
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Quick replies attached after rendering; empty for most turns.
    pub quick_replies: Vec<QuickReply>,
}

impl Turn {
    fn new(author: Author, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author,
            content: content.into(),
            created_at: Utc::now(),
            quick_replies: Vec::new(),
        }
    }

    /// A turn authored by the visitor.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Author::User, content)
    }

    /// A turn authored by the assistant.
    pub fn bot(content: impl Into<String>) -> Self {
        Self::new(Author::Bot, content)
    }

    pub fn is_bot(&self) -> bool {
        self.author == Author::Bot
    }
}
