//! Error type for failed Jikan API calls.
//!
//! # Design
//! There is exactly one failure the core reports: the server answered with a
//! status of 400 or above. The message carries the status, the server's own
//! `error` text and caller-supplied context pairs, rendered as
//! `"<status> <error>: error for k1=v1, k2=v2"`. URL building never fails, so
//! nothing else needs a variant.

use std::fmt;

use thiserror::Error;

/// Ordered diagnostic key/value pairs attached to an [`ApiError`].
///
/// Pairs render in insertion order so error messages are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    pairs: Vec<(String, String)>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair, converting both sides with `Display`.
    pub fn with(mut self, key: impl fmt::Display, value: impl fmt::Display) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

impl<K: fmt::Display, V: fmt::Display> FromIterator<(K, V)> for ErrorContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ErrorContext::new(), |ctx, (key, value)| ctx.with(key, value))
    }
}

/// The server rejected a request (status >= 400).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{status} {error}: error for {context}")]
pub struct ApiError {
    status: u16,
    error: String,
    context: ErrorContext,
}

impl ApiError {
    pub fn new(status: u16, error: impl Into<String>, context: ErrorContext) -> Self {
        Self {
            status,
            error: error.into(),
            context,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// The `error` field of the response body, or `""` when it had none.
    pub fn error_text(&self) -> &str {
        &self.error
    }

    pub fn context(&self) -> &ErrorContext {
        &self.context
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
