//! # Brelinx chatbot
//!
//! Wires the knowledge base to a [`ConversationView`]: the [`TurnOrchestrator`] renders the user
//! turn, shows a typing indicator, and after a randomized delay renders the classified reply with
//! optional quick replies. Config comes from env.

pub mod config;
pub mod conversation;
pub mod delay;
pub mod orchestrator;

pub use chat_core::{init_tracing, Author, ChatError, ConversationView, QuickReply, Result, Turn};
pub use knowledge_base::{KnowledgeBase, KnowledgeError, Topic};

pub use config::ChatbotConfig;
pub use conversation::{ConversationLog, Entry};
pub use delay::TypingDelay;
pub use orchestrator::{PendingReply, TurnOrchestrator};

use std::sync::Arc;

/// Builds an orchestrator over the shipped knowledge base. Fails if the table is malformed.
pub fn build_orchestrator(
    config: &ChatbotConfig,
    view: Arc<dyn ConversationView>,
) -> anyhow::Result<TurnOrchestrator> {
    let knowledge = KnowledgeBase::builtin()?;
    let delay = TypingDelay::from_config(config)?;
    Ok(TurnOrchestrator::new(Arc::new(knowledge), view, delay))
}
