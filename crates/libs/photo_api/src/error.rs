use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotoApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
