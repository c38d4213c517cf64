use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Capture failed: {0}")]
    Capture(String),

    #[error("Classification service error{}: {message}", status_suffix(.status))]
    Remote {
        status: Option<u16>,
        message: String,
    },

    #[error("Malformed classification response: {0}")]
    Parse(String),

    #[error("Invalid emoji pool: {0}")]
    InvalidPool(String),

    #[error("Invalid session state: {0}")]
    InvalidState(String),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (HTTP {})", code),
        None => String::new(),
    }
}

impl Error {
    /// Failures that only cost the current tick; the session keeps running.
    pub fn is_tick_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Capture(_) | Error::Remote { .. } | Error::Parse(_)
        )
    }

    pub fn remote(message: impl Into<String>) -> Self {
        Error::Remote {
            status: None,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        let status = e.status().map(|s| s.as_u16());
        let message = if e.is_timeout() {
            format!("Request timed out: {}", e)
        } else if e.is_connect() {
            format!("Connection failed: {}", e)
        } else if e.is_decode() {
            // Body could not be read as the expected JSON
            return Error::Parse(e.to_string());
        } else if e.is_request() {
            format!("Request error: {}", e)
        } else {
            format!("HTTP error: {}", e)
        };
        Error::Remote { status, message }
    }
}
