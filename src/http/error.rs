//! Errors raised while fetching a JSON document.

/// The two ways a fetch can fail. Neither is retried.
#[derive(Debug)]
pub enum HttpError {
    /// The request could not be sent, the connection failed, or the
    /// server answered with a non-success status
    Fetch(String),
    /// The response body is not valid JSON of the expected shape
    Decode(String),
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::Fetch(msg) => write!(f, "Request failed: {}", msg),
            HttpError::Decode(msg) => write!(f, "Invalid response body: {}", msg),
        }
    }
}

impl std::error::Error for HttpError {}

impl HttpError {
    pub(crate) fn from_request(error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) => HttpError::Fetch(format!("server returned HTTP {}", status)),
            None => HttpError::Fetch(error.to_string()),
        }
    }

    pub(crate) fn from_decode(error: serde_json::Error) -> Self {
        HttpError::Decode(error.to_string())
    }
}
