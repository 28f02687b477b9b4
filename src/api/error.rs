use thiserror::Error;

/// Failure of a single request.
///
/// The list view treats `Status` differently from the other two classes, so
/// the distinction must survive all the way to the widget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response, or the body could not be read.
    #[error("transport error: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("http status {0}")]
    Status(u16),
    /// The body was not the JSON we expected.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The request was refused locally and never sent.
    #[error("invalid notification id '{0}'")]
    InvalidId(String),
}

impl FetchError {
    /// `true` for failures where retrying the same request may help.
    pub fn is_retryable(&self) -> bool {
        matches!(self, FetchError::Transport(_) | FetchError::Decode(_))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
