//! # chat-core
//!
//! Core types and traits for the site assistant: [`Turn`], [`QuickReply`], the [`ConversationView`]
//! seam the UI shell implements, errors, and tracing initialization. Shell-agnostic; used by
//! knowledge-base, chatbot and brelinx-cli.

pub mod error;
pub mod logger;
pub mod types;
pub mod view;

pub use error::{ChatError, Result};
pub use logger::init_tracing;
pub use types::{Author, QuickReply, Turn};
pub use view::ConversationView;
