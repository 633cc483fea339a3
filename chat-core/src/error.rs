use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("View error: {0}")]
    View(String),

    #[error("Turn not found: {0}")]
    TurnNotFound(String),

    #[error("Typing indicator not found: {0}")]
    TypingNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChatError>;
