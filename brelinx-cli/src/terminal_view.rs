//! Terminal rendering of the conversation: turns as labelled blocks, quick replies as numbered options.

use async_trait::async_trait;
use brelinx_chatbot::{Author, ChatError, ConversationView, QuickReply, Result, Turn};
use std::io::Write;
use std::sync::Mutex;
use tracing::debug;

struct State<W> {
    out: W,
    next_indicator: u64,
    quick_replies: Vec<QuickReply>,
}

/// [`ConversationView`] that writes to any `Write` (stdout in the binary, a buffer in tests).
/// Remembers the most recent quick replies so a typed number can pick one.
pub struct TerminalView<W: Write + Send> {
    state: Mutex<State<W>>,
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            state: Mutex::new(State {
                out,
                next_indicator: 1,
                quick_replies: Vec::new(),
            }),
        }
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut State<W>) -> std::io::Result<T>) -> Result<T> {
        let mut state = self
            .state
            .lock()
            .map_err(|e| ChatError::View(format!("terminal state poisoned: {}", e)))?;
        Ok(f(&mut *state)?)
    }

    /// Quick reply for a 1-based choice typed by the visitor.
    pub fn quick_reply_choice(&self, input: &str) -> Option<QuickReply> {
        let index: usize = input.trim().parse().ok()?;
        let state = self.state.lock().ok()?;
        index
            .checked_sub(1)
            .and_then(|i| state.quick_replies.get(i))
            .cloned()
    }

    pub fn into_inner(self) -> Option<W> {
        self.state.into_inner().ok().map(|s| s.out)
    }
}

#[async_trait]
impl<W: Write + Send> ConversationView for TerminalView<W> {
    async fn append_turn(&self, turn: &Turn) -> Result<()> {
        self.with_state(|s| {
            let who = match turn.author {
                Author::User => "You",
                Author::Bot => "Brelinx",
            };
            writeln!(s.out, "{}:", who)?;
            for line in turn.content.lines() {
                writeln!(s.out, "  {}", line)?;
            }
            s.out.flush()
        })
    }

    async fn clear_input(&self) -> Result<()> {
        // The prompt line is already consumed.
        debug!("clear_input");
        Ok(())
    }

    async fn show_typing(&self) -> Result<String> {
        self.with_state(|s| {
            let id = format!("typing-{}", s.next_indicator);
            s.next_indicator += 1;
            writeln!(s.out, "Brelinx is typing...")?;
            s.out.flush()?;
            Ok(id)
        })
    }

    async fn remove_typing(&self, indicator_id: &str) -> Result<()> {
        debug!(indicator_id = %indicator_id, "typing indicator removed");
        Ok(())
    }

    async fn attach_quick_replies(&self, _turn_id: &str, replies: &[QuickReply]) -> Result<()> {
        self.with_state(|s| {
            for (i, reply) in replies.iter().enumerate() {
                writeln!(s.out, "  [{}] {}", i + 1, reply.label)?;
            }
            s.quick_replies = replies.to_vec();
            s.out.flush()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_renders_turns_and_numbered_quick_replies() {
        let view = TerminalView::new(Vec::new());
        view.append_turn(&Turn::user("hello")).await.unwrap();
        let id = view.show_typing().await.unwrap();
        view.remove_typing(&id).await.unwrap();
        let bot = Turn::bot("Line one\nLine two");
        view.append_turn(&bot).await.unwrap();
        view.attach_quick_replies(
            &bot.id,
            &[
                QuickReply::new("Coaching", "Tell me about programming coaching"),
                QuickReply::new("Contact", "How can I contact you?"),
            ],
        )
        .await
        .unwrap();

        assert_eq!(view.quick_reply_choice("2").unwrap().label, "Contact");
        assert!(view.quick_reply_choice("0").is_none());
        assert!(view.quick_reply_choice("3").is_none());
        assert!(view.quick_reply_choice("hello").is_none());

        let out = String::from_utf8(view.into_inner().unwrap()).unwrap();
        assert_eq!(
            out,
            "You:\n  hello\nBrelinx is typing...\nBrelinx:\n  Line one\n  Line two\n  [1] Coaching\n  [2] Contact\n"
        );
    }
}
