//! Error type definitions.

use std::error::Error as StdError;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Categories of fetch failure.
///
/// Used for logging only; every category produces the same error-shaped
/// report for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FetchErrorKind {
    /// The URL could not be turned into a request (bad syntax, unknown scheme)
    InvalidUrl,
    /// The request did not complete within the timeout
    Timeout,
    /// DNS resolution or TCP/TLS connection failed
    Connect,
    /// The server answered with a 4xx/5xx status
    Status(u16),
    /// Redirect loop or too many redirects
    Redirect,
    /// Reading the response body failed
    Body,
    /// The response body could not be decoded as text
    Decode,
    /// Anything reqwest does not classify further
    Other,
}

impl FetchErrorKind {
    /// Short label used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorKind::InvalidUrl => "invalid-url",
            FetchErrorKind::Timeout => "timeout",
            FetchErrorKind::Connect => "connect",
            FetchErrorKind::Status(_) => "http-status",
            FetchErrorKind::Redirect => "redirect",
            FetchErrorKind::Body => "body",
            FetchErrorKind::Decode => "decode",
            FetchErrorKind::Other => "other",
        }
    }
}

/// Failure to retrieve the page.
///
/// The display form is the message shown in the "Error" row of the report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}: {}", crate::config::FETCH_ERROR_PREFIX, .message)]
pub struct FetchError {
    kind: FetchErrorKind,
    message: String,
}

impl FetchError {
    /// Creates a fetch error of the given kind.
    pub fn new(kind: FetchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The failure category.
    pub fn kind(&self) -> FetchErrorKind {
        self.kind
    }

    /// The underlying cause, without the "Failed to fetch data" prefix.
    pub fn cause(&self) -> &str {
        &self.message
    }
}

impl From<ReqwestError> for FetchError {
    fn from(error: ReqwestError) -> Self {
        let kind = super::categorize_reqwest_error(&error);
        FetchError::new(kind, describe_reqwest_error(&error))
    }
}

/// Renders a reqwest error together with its source chain.
///
/// reqwest's own `Display` stops at "error sending request for url (...)"; the
/// useful part (DNS failure, connection refused) lives in the sources.
fn describe_reqwest_error(error: &ReqwestError) -> String {
    let mut message = error.to_string();
    let mut source = StdError::source(error);
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
