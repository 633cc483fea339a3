use thiserror::Error;

use crate::topic::Topic;

/// Malformed table detected while building a [`crate::KnowledgeBase`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum KnowledgeError {
    #[error("No entry for topic: {0}")]
    MissingTopic(Topic),

    #[error("Topic declared more than once: {0}")]
    DuplicateTopic(Topic),

    #[error("The default topic cannot carry triggers")]
    DefaultHasTriggers,

    #[error("Invalid trigger {trigger:?} for topic {topic}")]
    InvalidTrigger { topic: Topic, trigger: String },

    #[error("Empty response for topic: {0}")]
    EmptyResponse(Topic),
}

pub type Result<T> = std::result::Result<T, KnowledgeError>;
