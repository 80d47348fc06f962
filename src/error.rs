// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Specific failure kinds for remote data loading.
/// Cloneable so a failed result can live in component state and be
/// re-presented without re-fetching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadFailure {
    /// Connection, DNS, or timeout problem reaching the platform.
    Network(String),

    /// The access token was rejected (HTTP 401/403).
    Unauthorized,

    /// The course or assignment does not exist (HTTP 404).
    NotFound,

    /// The platform answered with an unexpected status code.
    Status(u16),

    /// The response body could not be decoded.
    Parse(String),
}

impl LoadFailure {
    /// Returns the i18n message key for this failure kind.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            LoadFailure::Network(_) => "error-load-network",
            LoadFailure::Unauthorized => "error-load-unauthorized",
            LoadFailure::NotFound => "error-load-not-found",
            LoadFailure::Status(_) => "error-load-status",
            LoadFailure::Parse(_) => "error-load-parse",
        }
    }

    /// Categorizes an HTTP status code into a failure kind.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => LoadFailure::Unauthorized,
            404 => LoadFailure::NotFound,
            other => LoadFailure::Status(other),
        }
    }
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadFailure::Network(msg) => write!(f, "Network failure: {}", msg),
            LoadFailure::Unauthorized => write!(f, "Access token rejected"),
            LoadFailure::NotFound => write!(f, "Resource not found"),
            LoadFailure::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
            LoadFailure::Parse(msg) => write!(f, "Response decoding failed: {}", msg),
        }
    }
}

impl From<reqwest::Error> for LoadFailure {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return LoadFailure::from_status(status.as_u16());
        }
        if err.is_decode() {
            return LoadFailure::Parse(err.to_string());
        }
        LoadFailure::Network(err.to_string())
    }
}

/// Local fault outside the load path: filesystem, settings file, or
/// client construction. [`LoadFailure`] stays separate because it is
/// carried in screen state rather than bubbled to a caller.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(detail) => write!(f, "I/O failure: {}", detail),
            Error::Config(detail) => write!(f, "Configuration problem: {}", detail),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
