use thiserror::Error;

#[derive(Error, Debug)]
pub enum TangoError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to load file: {0}")]
    FailedToLoadFile(String),

    #[error("Vocabulary has no entries: {0}")]
    EmptyVocabulary(String),

    #[error("TangoError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for TangoError {
    fn from(error: std::io::Error) -> Self {
        TangoError::Io(Box::new(error))
    }
}
