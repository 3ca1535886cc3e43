use std::time::Duration;
use thiserror::Error;

pub type VerifyResult<T> = Result<T, VerifyError>;

/// Every way a verification run can fail. All of them are fatal.
#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("App does not export a request handler")]
    ExportInvalid,

    #[error("Failed to bind listener: {0}")]
    Bind(#[from] std::io::Error),

    #[error("{0}")]
    Transport(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Response is not a JSON object: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Health status mismatch: {0}")]
    AssertionMismatch(String),
}

impl VerifyError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> u8 {
        1
    }
}

impl From<reqwest::Error> for VerifyError {
    fn from(err: reqwest::Error) -> Self {
        VerifyError::Transport(err.to_string())
    }
}
