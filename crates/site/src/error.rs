use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Please fill in all fields")]
    IncompleteForm,

    #[error("Preference file error: {0}")]
    Preference(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SiteError>;
