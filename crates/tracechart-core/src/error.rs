use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown palette: {0}")]
    InvalidPalette(String),

    #[error("Empty trace: {0}")]
    EmptyTrace(String),

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    pub fn empty_trace(what: impl Into<String>) -> Self {
        Error::EmptyTrace(what.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
