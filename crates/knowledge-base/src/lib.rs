//! # knowledge-base
//!
//! Keyword classification and canned responses for the site assistant. The table is an ordered
//! list of (topic, triggers, response) records: the first topic with any trigger contained in the
//! lowercased message wins, otherwise [`Topic::Default`].

mod error;
mod knowledge;
mod table;
mod topic;

pub use error::{KnowledgeError, Result};
pub use knowledge::{KnowledgeBase, TopicEntry};
pub use table::{builtin_entries, suggested_replies, DEFAULT_RESPONSE};
pub use topic::Topic;
