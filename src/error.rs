use std::fmt;

/// Custom error type for avi2tf operations
#[derive(Debug)]
pub enum AviError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// Controller returned an error response
    Api { status: u16, message: String },
    /// Session could not be established
    Auth(String),
    /// JSON parsing error
    Json(String),
    /// Local file or console I/O failed
    Io(std::io::Error),
    /// Interactive prompt failed
    Prompt(String),
    /// External tool ran and reported failure
    Subprocess(String),
}

impl fmt::Display for AviError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AviError::Http(e) => write!(f, "HTTP request failed: {}", e),
            AviError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            AviError::Auth(msg) => write!(f, "{}", msg),
            AviError::Json(msg) => write!(f, "JSON error: {}", msg),
            AviError::Io(e) => write!(f, "I/O error: {}", e),
            AviError::Prompt(msg) => write!(f, "prompt failed: {}", msg),
            AviError::Subprocess(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AviError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AviError::Http(e) => Some(e),
            AviError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AviError {
    fn from(err: reqwest::Error) -> Self {
        AviError::Http(err)
    }
}

impl From<serde_json::Error> for AviError {
    fn from(err: serde_json::Error) -> Self {
        AviError::Json(err.to_string())
    }
}

impl From<std::io::Error> for AviError {
    fn from(err: std::io::Error) -> Self {
        AviError::Io(err)
    }
}

/// Result type alias for avi2tf operations
pub type Result<T> = std::result::Result<T, AviError>;
