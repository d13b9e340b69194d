use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadinessError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("answers parse error: {0}")]
    AnswersParse(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReadinessError>;
