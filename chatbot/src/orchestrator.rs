//! Turn orchestration: user turn, typing indicator, delayed classified reply, quick replies.
//!
//! Each accepted message spawns one independent delayed task. Pending replies never wait on one
//! another, so replies to rapid sends may land out of order when a later draw is shorter.

use chat_core::{ConversationView, QuickReply, Result, Turn};
use knowledge_base::{KnowledgeBase, Topic};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

use crate::delay::TypingDelay;

/// A reply scheduled by [`TurnOrchestrator::handle_user_message`].
#[derive(Debug)]
pub struct PendingReply {
    delay: Duration,
    handle: JoinHandle<Option<Turn>>,
}

impl PendingReply {
    /// How long the typing indicator stays up before the reply renders.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Cancels the reply if it has not rendered yet (e.g. the view is being torn down).
    pub fn abort(&self) {
        self.handle.abort();
    }

    /// Waits for the reply; returns the rendered bot turn, or None if it was aborted or failed.
    pub async fn wait(self) -> Option<Turn> {
        self.handle.await.ok().flatten()
    }
}

/// Drives the conversation: owns the knowledge base, the view, and the delay policy.
#[derive(Clone)]
pub struct TurnOrchestrator {
    knowledge: Arc<KnowledgeBase>,
    view: Arc<dyn ConversationView>,
    delay: TypingDelay,
}

impl TurnOrchestrator {
    pub fn new(
        knowledge: Arc<KnowledgeBase>,
        view: Arc<dyn ConversationView>,
        delay: TypingDelay,
    ) -> Self {
        Self {
            knowledge,
            view,
            delay,
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Handles one visitor message. Whitespace-only text is ignored (`Ok(None)`).
    /// Otherwise appends the user turn, clears the input, shows a typing indicator, and schedules
    /// the reply; the returned handle can be awaited or aborted.
    #[instrument(skip(self, raw_text), fields(len = raw_text.len()))]
    pub async fn handle_user_message(&self, raw_text: &str) -> Result<Option<PendingReply>> {
        if raw_text.trim().is_empty() {
            return Ok(None);
        }

        let user_turn = Turn::user(raw_text);
        self.view.append_turn(&user_turn).await?;
        self.view.clear_input().await?;
        let indicator_id = self.view.show_typing().await?;

        let delay = self.delay.sample();
        info!(
            turn_id = %user_turn.id,
            delay_ms = delay.as_millis() as u64,
            "step: user turn rendered, reply scheduled"
        );

        let this = self.clone();
        let text = raw_text.to_string();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match this.deliver_reply(&text, &indicator_id).await {
                Ok(turn) => Some(turn),
                Err(e) => {
                    error!(error = %e, indicator_id = %indicator_id, "Failed to render reply");
                    None
                }
            }
        });

        Ok(Some(PendingReply { delay, handle }))
    }

    /// Sends a quick reply's preset message as if the visitor typed it.
    pub async fn handle_quick_reply(&self, reply: &QuickReply) -> Result<Option<PendingReply>> {
        info!(label = %reply.label, "step: quick reply activated");
        self.handle_user_message(&reply.message).await
    }

    async fn deliver_reply(&self, text: &str, indicator_id: &str) -> Result<Turn> {
        self.view.remove_typing(indicator_id).await?;

        let topic = self.knowledge.classify(text);
        let mut turn = Turn::bot(self.knowledge.respond(topic));
        self.view.append_turn(&turn).await?;

        let replies = self.knowledge.quick_replies(topic);
        if !replies.is_empty() {
            self.view.attach_quick_replies(&turn.id, replies).await?;
            turn.quick_replies = replies.to_vec();
        }

        info!(
            topic = %topic,
            turn_id = %turn.id,
            quick_replies = replies.len(),
            "step: bot turn rendered"
        );
        Ok(turn)
    }

    /// Topic the knowledge base resolves `text` to, without touching the view.
    pub fn classify(&self, text: &str) -> Topic {
        self.knowledge.classify(text)
    }
}
