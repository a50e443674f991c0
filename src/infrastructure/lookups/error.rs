//! # Lookup Errors
//!
//! Error types for the external lookup collaborators.
//!
//! The enrichment core never retries or swallows these; a lookup failure
//! aborts the whole enriching operation. Retryability only matters below
//! the core, where the HTTP clients apply their bounded retry policy.
//!
//! # Examples
//!
//! ```
//! use vehicle_registry::infrastructure::lookups::error::LookupError;
//!
//! let error = LookupError::timeout("pricing", "request timed out after 5000ms");
//! assert!(error.is_retryable());
//!
//! let error = LookupError::protocol("maps", "malformed response body");
//! assert!(!error.is_retryable());
//! ```

use thiserror::Error;

/// Error type for lookup client operations.
///
/// Every variant carries the collaborator name (`"pricing"` or
/// `"maps"`) so failures in a multi-call enrichment are attributable.
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    /// Request timed out.
    #[error("{service} lookup timeout: {message}")]
    Timeout {
        /// Collaborator name.
        service: &'static str,
        /// Error message.
        message: String,
    },

    /// Network or connection error.
    #[error("{service} lookup connection error: {message}")]
    Connection {
        /// Collaborator name.
        service: &'static str,
        /// Error message.
        message: String,
    },

    /// The collaborator answered with a server-side failure.
    #[error("{service} lookup unavailable: {message}")]
    Unavailable {
        /// Collaborator name.
        service: &'static str,
        /// Error message.
        message: String,
    },

    /// The collaborator rejected the request.
    #[error("{service} lookup rejected request: {message}")]
    InvalidRequest {
        /// Collaborator name.
        service: &'static str,
        /// Error message.
        message: String,
    },

    /// Malformed or unexpected response.
    #[error("{service} lookup protocol error: {message}")]
    Protocol {
        /// Collaborator name.
        service: &'static str,
        /// Error message.
        message: String,
    },

    /// Internal client error.
    #[error("{service} lookup internal error: {message}")]
    Internal {
        /// Collaborator name.
        service: &'static str,
        /// Error message.
        message: String,
    },
}

impl LookupError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(service: &'static str, message: impl Into<String>) -> Self {
        Self::Timeout {
            service,
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(service: &'static str, message: impl Into<String>) -> Self {
        Self::Connection {
            service,
            message: message.into(),
        }
    }

    /// Creates an unavailable error.
    #[must_use]
    pub fn unavailable(service: &'static str, message: impl Into<String>) -> Self {
        Self::Unavailable {
            service,
            message: message.into(),
        }
    }

    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(service: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            service,
            message: message.into(),
        }
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol(service: &'static str, message: impl Into<String>) -> Self {
        Self::Protocol {
            service,
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(service: &'static str, message: impl Into<String>) -> Self {
        Self::Internal {
            service,
            message: message.into(),
        }
    }

    /// Returns the collaborator name.
    #[must_use]
    pub const fn service(&self) -> &'static str {
        match self {
            Self::Timeout { service, .. }
            | Self::Connection { service, .. }
            | Self::Unavailable { service, .. }
            | Self::InvalidRequest { service, .. }
            | Self::Protocol { service, .. }
            | Self::Internal { service, .. } => service,
        }
    }

    /// Returns true if this error is transient and may succeed on retry.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::Connection { .. } | Self::Unavailable { .. }
        )
    }

    /// Returns true if this error is a client error (bad request).
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequest { .. })
    }
}

/// Result type for lookup operations.
pub type LookupResult<T> = Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_retryable() {
        let error = LookupError::timeout("pricing", "test");
        assert!(error.is_retryable());
        assert!(!error.is_client_error());
        assert_eq!(error.service(), "pricing");
    }

    #[test]
    fn connection_is_retryable() {
        assert!(LookupError::connection("maps", "refused").is_retryable());
    }

    #[test]
    fn unavailable_is_retryable() {
        assert!(LookupError::unavailable("pricing", "503").is_retryable());
    }

    #[test]
    fn invalid_request_is_client_error() {
        let error = LookupError::invalid_request("pricing", "bad id");
        assert!(error.is_client_error());
        assert!(!error.is_retryable());
    }

    #[test]
    fn protocol_is_not_retryable() {
        assert!(!LookupError::protocol("maps", "bad json").is_retryable());
    }

    #[test]
    fn display_carries_service_name() {
        let display = LookupError::timeout("pricing", "request timed out").to_string();
        assert!(display.contains("pricing"));
        assert!(display.contains("timeout"));
    }
}
