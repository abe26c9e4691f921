use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Transient,
    Permanent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    Network,
    HttpStatus,
    EmptyBody,
    Deserialization,
    MissingField,
    InvalidUrl,
    InvalidTime,
}

impl ErrorKind {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Network => "NETWORK_ERROR",
            Self::HttpStatus => "HTTP_STATUS",
            Self::EmptyBody => "EMPTY_BODY",
            Self::Deserialization => "DESERIALIZATION_ERROR",
            Self::MissingField => "MISSING_FIELD",
            Self::InvalidUrl => "INVALID_URL",
            Self::InvalidTime => "INVALID_TIME",
        }
    }

    /// Only used to annotate log records. Every failure is handled the same
    /// way: logged and swallowed, previous state kept.
    #[must_use]
    pub const fn default_severity(self) -> ErrorSeverity {
        match self {
            Self::Network | Self::HttpStatus => ErrorSeverity::Transient,
            Self::EmptyBody
            | Self::Deserialization
            | Self::MissingField
            | Self::InvalidUrl
            | Self::InvalidTime => ErrorSeverity::Permanent,
        }
    }
}

/// Failure of any outbound fetch: reference data or prayer timings.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    #[error("response body was empty")]
    EmptyBody,

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("response is missing `{0}`")]
    MissingField(String),

    #[error("request could not be built: {0}")]
    Config(#[from] ConfigError),
}

impl FetchError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) => ErrorKind::Network,
            Self::Status { .. } => ErrorKind::HttpStatus,
            Self::EmptyBody => ErrorKind::EmptyBody,
            Self::Malformed(_) => ErrorKind::Deserialization,
            Self::MissingField(_) => ErrorKind::MissingField,
            Self::Config(_) => ErrorKind::InvalidUrl,
        }
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind().code()
    }

    #[must_use]
    pub fn is_transient(&self) -> bool {
        self.kind().default_severity() == ErrorSeverity::Transient
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        Self::Malformed(e.to_string())
    }
}

impl From<geojson::Error> for FetchError {
    fn from(e: geojson::Error) -> Self {
        Self::Malformed(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ConfigError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeFormatError {
    #[error("'{0}' is not of the form H:MM")]
    MissingSeparator(String),

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("hour {0} is out of range [0, 23]")]
    HourOutOfRange(u32),

    #[error("minute {0} is out of range [0, 59]")]
    MinuteOutOfRange(u32),
}

impl TimeFormatError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidTime
    }
}
