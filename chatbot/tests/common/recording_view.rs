//! Recording implementation of [`brelinx_chatbot::ConversationView`] for integration tests.
//!
//! Logs every call in order so tests can assert on the choreography without a real shell.
//! `fail_remove_typing` makes the delayed half of a turn fail.

use async_trait::async_trait;
use brelinx_chatbot::{Author, ChatError, ConversationView, QuickReply, Result, Turn};
use std::sync::Mutex;

#[derive(Default)]
pub struct RecordingView {
    calls: Mutex<Vec<String>>,
    fail_remove_typing: bool,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_remove_typing() -> Self {
        Self {
            fail_remove_typing: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ConversationView for RecordingView {
    async fn append_turn(&self, turn: &Turn) -> Result<()> {
        let author = match turn.author {
            Author::User => "user",
            Author::Bot => "bot",
        };
        self.record(format!("append_turn:{}", author));
        Ok(())
    }

    async fn clear_input(&self) -> Result<()> {
        self.record("clear_input".to_string());
        Ok(())
    }

    async fn show_typing(&self) -> Result<String> {
        self.record("show_typing".to_string());
        Ok("typing-1".to_string())
    }

    async fn remove_typing(&self, indicator_id: &str) -> Result<()> {
        self.record(format!("remove_typing:{}", indicator_id));
        if self.fail_remove_typing {
            return Err(ChatError::TypingNotFound(indicator_id.to_string()));
        }
        Ok(())
    }

    async fn attach_quick_replies(&self, _turn_id: &str, replies: &[QuickReply]) -> Result<()> {
        self.record(format!("attach_quick_replies:{}", replies.len()));
        Ok(())
    }
}
