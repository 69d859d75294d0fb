use thiserror::Error;

pub type Result<T> = std::result::Result<T, FameError>;

#[derive(Error, Debug)]
pub enum FameError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Git discover error: {0}")]
    GitDiscover(#[from] Box<gix::discover::Error>),
    #[error("Git command failed: {0}")]
    GitCommand(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

// Manual From implementation for the unboxed to boxed conversion
impl From<gix::discover::Error> for FameError {
    fn from(err: gix::discover::Error) -> Self {
        FameError::GitDiscover(Box::new(err))
    }
}
