// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MusicBrainzError>;

#[derive(Debug, Error)]
pub enum MusicBrainzError {
    /// Transport failure: connection refused, DNS, timeout, broken body stream.
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid service URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The body was not a WS2 document of the expected shape.
    #[error("Failed to decode MusicBrainz response: {0}")]
    Decode(#[from] quick_xml::DeError),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },
}
