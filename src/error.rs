//! Error type shared by the whole crate.

use crate::models::Ipv4;
use thiserror::Error;

/// Result alias used by every fallible netbuddy operation.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed address or CIDR string.
    #[error("could not parse '{input}': {reason}")]
    Parse { input: String, reason: String },

    /// Prefix length outside 0..=32.
    #[error("prefix length /{0} is out of range, must be 0-32")]
    Range(u32),

    /// Malformed or non-contiguous dotted-decimal mask.
    #[error("invalid subnet mask '{input}': {reason}")]
    Format { input: String, reason: String },

    /// Stepping past the given subnet would run beyond 255.255.255.255.
    #[error("address space exhausted: no subnet follows {0}")]
    AddressSpaceExhausted(Ipv4),

    #[error("unsupported service lookup: {0}")]
    UnknownService(String),

    #[error("failed to read network interfaces: {0}")]
    Interfaces(#[source] std::io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to initialise logging: {0}")]
    Logging(String),

    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        Error::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn format(input: &str, reason: impl Into<String>) -> Self {
        Error::Format {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_message() {
        assert_eq!(
            Error::Range(33).to_string(),
            "prefix length /33 is out of range, must be 0-32"
        );
    }

    #[test]
    fn test_exhausted_message() {
        let last = Ipv4::new("255.255.255.0/24").unwrap();
        assert_eq!(
            Error::AddressSpaceExhausted(last).to_string(),
            "address space exhausted: no subnet follows 255.255.255.0/24"
        );
    }
}
