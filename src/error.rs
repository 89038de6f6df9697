// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Translate(TranslateError),
}

/// Specific error types for translation provider failures.
///
/// All variants are handled identically by the UI (a fixed in-place error
/// message plus a transient toast); the variants only shape the detail
/// text shown in the toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// The request never reached the provider (DNS, connect, TLS, ...).
    Network(String),

    /// The provider answered with a non-success HTTP status.
    Status(u16),

    /// The response body could not be read or did not have the expected shape.
    MalformedResponse(String),

    /// The provider answered successfully but produced no translated text.
    EmptyTranslation,
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::Network(msg) => write!(f, "network error: {}", msg),
            TranslateError::Status(code) => {
                write!(f, "translation service returned status {}", code)
            }
            TranslateError::MalformedResponse(msg) => {
                write!(f, "unexpected translation response: {}", msg)
            }
            TranslateError::EmptyTranslation => write!(f, "empty translation received"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Translate(e) => write!(f, "Translation Error: {}", e),
        }
    }
}

impl From<TranslateError> for Error {
    fn from(err: TranslateError) -> Self {
        Error::Translate(err)
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

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        TranslateError::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
