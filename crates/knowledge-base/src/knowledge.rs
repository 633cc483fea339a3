//! [`KnowledgeBase`]: ordered topic table with classification, response lookup and quick replies.

use std::collections::HashSet;

use chat_core::QuickReply;
use tracing::{debug, info};

use crate::error::{KnowledgeError, Result};
use crate::table::{builtin_entries, suggested_replies, DEFAULT_RESPONSE};
use crate::topic::Topic;

/// One record of the table: a topic, its substring triggers, and its reply.
#[derive(Debug, Clone, Copy)]
pub struct TopicEntry {
    pub topic: Topic,
    /// Lowercase substrings; any one contained in the message selects this topic.
    pub triggers: &'static [&'static str],
    pub response: &'static str,
}

/// Validated, immutable topic table. Entry order is match priority.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<TopicEntry>,
    default_response: &'static str,
    quick_replies: Vec<QuickReply>,
}

impl KnowledgeBase {
    /// Builds a table from `entries` (priority order) and the fallback reply.
    /// Rejects tables where a keyed topic is missing or repeated, `Default` carries triggers,
    /// a trigger is empty or not lowercase, or any reply is blank.
    pub fn new(entries: Vec<TopicEntry>, default_response: &'static str) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.topic == Topic::Default {
                return Err(KnowledgeError::DefaultHasTriggers);
            }
            if !seen.insert(entry.topic) {
                return Err(KnowledgeError::DuplicateTopic(entry.topic));
            }
            if entry.triggers.is_empty() {
                return Err(KnowledgeError::InvalidTrigger {
                    topic: entry.topic,
                    trigger: String::new(),
                });
            }
            for trigger in entry.triggers {
                if trigger.is_empty() || *trigger != trigger.to_lowercase() {
                    return Err(KnowledgeError::InvalidTrigger {
                        topic: entry.topic,
                        trigger: trigger.to_string(),
                    });
                }
            }
            if entry.response.trim().is_empty() {
                return Err(KnowledgeError::EmptyResponse(entry.topic));
            }
        }
        if let Some(missing) = Topic::ALL
            .iter()
            .find(|t| **t != Topic::Default && !seen.contains(*t))
        {
            return Err(KnowledgeError::MissingTopic(*missing));
        }
        if default_response.trim().is_empty() {
            return Err(KnowledgeError::EmptyResponse(Topic::Default));
        }

        info!(topics = entries.len(), "Knowledge base loaded");

        Ok(Self {
            entries,
            default_response,
            quick_replies: suggested_replies(),
        })
    }

    /// The shipped table.
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_entries(), DEFAULT_RESPONSE)
    }

    /// Entries in priority order.
    pub fn entries(&self) -> &[TopicEntry] {
        &self.entries
    }

    /// Resolves free text to a topic: first entry (in declaration order) with any trigger
    /// contained in the lowercased text, else [`Topic::Default`].
    pub fn classify(&self, text: &str) -> Topic {
        let message = text.to_lowercase();
        for entry in &self.entries {
            if let Some(trigger) = entry.triggers.iter().find(|t| message.contains(**t)) {
                debug!(topic = %entry.topic, trigger = %trigger, "Trigger matched");
                return entry.topic;
            }
        }
        Topic::Default
    }

    /// Reply text for a topic.
    pub fn respond(&self, topic: Topic) -> &str {
        if topic == Topic::Default {
            return self.default_response;
        }
        // `new` guarantees every keyed topic has an entry.
        self.entries
            .iter()
            .find(|e| e.topic == topic)
            .map(|e| e.response)
            .unwrap_or(self.default_response)
    }

    /// Quick replies offered after the reply for `topic`; only services and default get any.
    pub fn quick_replies(&self, topic: Topic) -> &[QuickReply] {
        match topic {
            Topic::Services | Topic::Default => &self.quick_replies,
            _ => &[],
        }
    }
}
