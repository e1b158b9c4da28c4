use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a download run
#[derive(Debug, Error)]
pub enum AppError {
    // Network
    #[error("Trouble making GET request to {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Trouble reading response body from {url}: {source}")]
    ResponseBody {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    // Feed content
    #[error("Trouble with json indent: {0}")]
    MalformedJson(#[from] serde_json::Error),

    // Filesystem
    #[error("Trouble deriving file name for {url}")]
    UndeducibleFilename { url: String },
    #[error("Trouble creating file {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Trouble writing output: {0}")]
    Output(#[from] std::io::Error),

    // System
    #[error("Invalid {key}: {message}")]
    InvalidConfig { key: String, message: String },
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

/// Helper functions for common error conversions
impl AppError {
    pub fn request(url: &str, source: reqwest::Error) -> Self {
        log::debug!("Network error for {}: {}", url, source);
        AppError::Request {
            url: url.to_string(),
            source,
        }
    }

    pub fn response_body(url: &str, source: reqwest::Error) -> Self {
        log::debug!("Body read error for {}: {}", url, source);
        AppError::ResponseBody {
            url: url.to_string(),
            source,
        }
    }

    pub fn undeducible_filename(url: &str) -> Self {
        AppError::UndeducibleFilename {
            url: url.to_string(),
        }
    }

    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::FileWrite {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_config(key: &str, message: &str) -> Self {
        AppError::InvalidConfig {
            key: key.to_string(),
            message: message.to_string(),
        }
    }
}
