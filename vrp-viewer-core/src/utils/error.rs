#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt;
use std::time::Duration;

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl fmt::Display for GenericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

impl From<serde_json::Error> for GenericError {
    fn from(value: serde_json::Error) -> Self {
        Self(value.to_string())
    }
}

/// Specifies why a remote resource could not be turned into a usable value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// Network error, non-success status or unreadable file.
    Transport(String),
    /// A body was received, but it is not JSON or does not match any accepted shape.
    Shape(String),
    /// The fetch did not finish within its stage time budget.
    Timeout(Duration),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "transport failure: '{msg}'"),
            FetchError::Shape(msg) => write!(f, "shape failure: '{msg}'"),
            FetchError::Timeout(duration) => write!(f, "timeout after {}ms", duration.as_millis()),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<FetchError> for GenericError {
    fn from(value: FetchError) -> Self {
        Self(value.to_string())
    }
}
