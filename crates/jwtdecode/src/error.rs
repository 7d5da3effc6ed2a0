//! Errors for jwtdecode

use thiserror::Error;

/// Reasons a compact token cannot be decoded
///
/// Each variant carries the offending input (a raw segment or the token and its
/// part count) so a malformed token can be diagnosed from the error alone.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The header or payload segment is not valid Base64URL
    #[error("Malformed jwt token, failed to decode base64Url value {0}")]
    InvalidBase64Url(String),

    /// The header or payload segment does not decode to a JSON object
    #[error("Malformed jwt token, failed to parse JSON value from base64Url {0}")]
    InvalidJson(String),

    /// The token does not consist of exactly three '.'-separated parts
    #[error("Malformed jwt token {0} has {1} parts when it should have 3 parts")]
    InvalidPartCount(String, usize),
}

impl DecodeError {
    /// The raw segment or token string this error refers to
    pub fn input(&self) -> &str {
        match self {
            DecodeError::InvalidBase64Url(value)
            | DecodeError::InvalidJson(value)
            | DecodeError::InvalidPartCount(value, _) => value,
        }
    }
}

/// Result type alias for decode operations
pub type Result<T> = std::result::Result<T, DecodeError>;
