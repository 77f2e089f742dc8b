use thiserror::Error;

pub type InsightsResult<T> = Result<T, InsightsError>;

#[derive(Error, Debug)]
pub enum InsightsError {
    #[error("Schema error: required column '{0}' not found in input sheet")]
    Schema(String),

    #[error("Discovery error: no input file found; checked: {0}")]
    Discovery(String),

    #[error("Sheet error: {0}")]
    Sheet(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
