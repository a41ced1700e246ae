//! Unified error types and the fault-disclosure policy.

use thiserror::Error;

/// Message returned to clients for handler faults outside development.
pub const GENERIC_FAULT_MESSAGE: &str = "Internal server error";

/// Unified error type for the demo service.
///
/// Only startup can fail; request handling converts every fault to a
/// response instead of propagating it.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Invalid configuration values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error (listener bind, serve loop).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Decide what a 500 response may tell the client about a fault.
///
/// In development the detail string is returned verbatim; in any other
/// environment the client sees only [`GENERIC_FAULT_MESSAGE`]. The full
/// detail is always logged server-side regardless.
pub fn fault_message(detail: &str, is_development: bool) -> String {
    if is_development {
        detail.to_string()
    } else {
        GENERIC_FAULT_MESSAGE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_discloses_fault_detail() {
        assert_eq!(fault_message("boom: index out of range", true), "boom: index out of range");
    }

    #[test]
    fn production_hides_fault_detail() {
        assert_eq!(fault_message("boom: index out of range", false), GENERIC_FAULT_MESSAGE);
    }

    #[test]
    fn empty_detail_still_hidden_in_production() {
        assert_eq!(fault_message("", false), GENERIC_FAULT_MESSAGE);
    }
}
