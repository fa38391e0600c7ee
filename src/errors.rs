use thiserror::Error;

pub type EmpathResult<T> = Result<T, EmpathError>;

#[derive(Debug, Error)]
pub enum EmpathError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EmpathError {
    pub fn api_error(msg: impl Into<String>) -> Self {
        EmpathError::Api(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        EmpathError::Config(msg.into())
    }
}
