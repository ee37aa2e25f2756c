use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Difficulty: {0}")]
    InvalidDifficulty(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
