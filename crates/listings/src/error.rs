// ABOUTME: Error types for fetching, field extraction, search URL building and CSV export.
// ABOUTME: FetchError is the only fatal failure; ParseFieldError is always absorbed into defaults.

use std::fmt;
use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors that can occur while fetching a results page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL did not parse as an absolute http(s) URL.
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The server answered with a non-success status.
    #[error("request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out")]
    Timeout {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The client could not be built from the given options.
    #[error("invalid fetch configuration: {reason}")]
    Config { reason: String },

    /// DNS, connection or body read failure.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Creates an InvalidUrl error with a custom reason.
    pub fn invalid_url(url: impl Into<String>, reason: impl fmt::Display) -> Self {
        FetchError::InvalidUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates a Config error.
    pub fn config(reason: impl fmt::Display) -> Self {
        FetchError::Config {
            reason: reason.to_string(),
        }
    }

    /// Classifies a reqwest error into Timeout or Transport.
    pub fn from_reqwest(url: impl Into<String>, source: reqwest::Error) -> Self {
        let url = url.into();
        if source.is_timeout() {
            FetchError::Timeout { url, source }
        } else {
            FetchError::Transport { url, source }
        }
    }

    /// Returns the HTTP status if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if this is a Timeout error.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout { .. })
    }

    /// The URL the failed request targeted, if a request was attempted.
    pub fn url(&self) -> Option<&str> {
        match self {
            FetchError::InvalidUrl { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Timeout { url, .. }
            | FetchError::Transport { url, .. } => Some(url),
            FetchError::Config { .. } => None,
        }
    }
}

/// Failure to read one field from one listing block.
///
/// Never surfaced past the extractor: every occurrence is replaced by the
/// field's default value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFieldError {
    #[error("no element matches {selector}")]
    Missing { selector: &'static str },

    #[error("element matching {selector} has no {attr} attribute")]
    MissingAttr {
        selector: &'static str,
        attr: &'static str,
    },
}

/// Invalid search parameters passed to the URL builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchUrlError {
    #[error("destination must not be empty")]
    EmptyDestination,

    #[error("invalid {field} date {value:?}: expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },

    #[error("checkout {checkout} must be after checkin {checkin}")]
    DateOrder { checkin: String, checkout: String },

    #[error("{field} must be at least 1")]
    ZeroCount { field: &'static str },

    #[error("unknown sort order {0:?}")]
    UnknownSort(String),
}

/// Failure while serialising records as CSV.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}
