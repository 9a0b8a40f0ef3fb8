// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FinderError>;

#[derive(Debug, Error)]
pub enum FinderError {
    /// The vendor page had no `vendor_locations` assignment in any script.
    #[error("Unable to parse events from HTTP response")]
    CalendarNotFound,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error: {status} {url}")]
    Status { status: reqwest::StatusCode, url: String },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("directions lookup failed with status {status}: {message}")]
    Routing { status: String, message: String },

    #[error("no route found from {origin:?} to {destination:?}")]
    NoRoute { origin: String, destination: String },

    #[error("event #{index}: {reason}")]
    BadEvent { index: usize, reason: String },

    #[error("could not read key file {}: {source}", path.display())]
    KeyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("key file {} is empty", path.display())]
    EmptyKey { path: PathBuf },

    #[error("output failed: {0}")]
    Io(#[from] std::io::Error),
}
