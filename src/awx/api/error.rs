//! Error types for the AWX API client
//!
//! Every transport or HTTP failure is collapsed into one enum so callers can
//! propagate with `?` and render a short message without inspecting the kind.

use thiserror::Error;

/// Maximum number of response-body characters carried into an error message
pub(crate) const ERROR_BODY_LIMIT: usize = 200;

/// Errors that can occur when talking to the AWX API
#[derive(Debug, Error)]
pub enum AwxApiError {
    /// Requested resource does not exist (HTTP 404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Credentials were rejected (HTTP 401)
    #[error("Authentication failed - check credentials")]
    AuthFailed,

    /// Authenticated user lacks access (HTTP 403)
    #[error("Permission denied - insufficient privileges")]
    PermissionDenied,

    /// AWX returned a 5xx response
    #[error("AWX server error: {message}")]
    ServerError {
        /// HTTP status code (5xx)
        status: u16,
        /// Truncated response body
        message: String,
    },

    /// Any other non-2xx response
    #[error("HTTP {status}: {message}")]
    GenericHttpError {
        /// HTTP status code
        status: u16,
        /// Truncated response body
        message: String,
    },

    /// TCP/TLS connection to AWX could not be established
    #[error("Cannot connect to AWX at {0}")]
    ConnectionFailed(String),

    /// The per-request timeout elapsed
    #[error("Request timeout after {0}s")]
    Timeout(u64),

    /// Transport failure that fits none of the above
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// A 2xx response body could not be decoded
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl AwxApiError {
    /// Map a non-success HTTP status to the matching error kind
    pub fn from_status(status: u16, endpoint: &str, body: &str) -> Self {
        let message = truncate_body(body);
        match status {
            404 => Self::NotFound(endpoint.to_string()),
            401 => Self::AuthFailed,
            403 => Self::PermissionDenied,
            500..=599 => Self::ServerError { status, message },
            _ => Self::GenericHttpError { status, message },
        }
    }

    /// HTTP status code carried by this error, if it came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound(_) => Some(404),
            Self::AuthFailed => Some(401),
            Self::PermissionDenied => Some(403),
            Self::ServerError { status, .. } | Self::GenericHttpError { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

fn truncate_body(body: &str) -> String {
    body.chars().take(ERROR_BODY_LIMIT).collect()
}

/// Result type alias for AWX API operations
pub type Result<T> = std::result::Result<T, AwxApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            AwxApiError::from_status(404, "jobs/1/", ""),
            AwxApiError::NotFound(ref e) if e == "jobs/1/"
        ));
        assert!(matches!(
            AwxApiError::from_status(401, "jobs/1/", ""),
            AwxApiError::AuthFailed
        ));
        assert!(matches!(
            AwxApiError::from_status(403, "jobs/1/", ""),
            AwxApiError::PermissionDenied
        ));
        assert!(matches!(
            AwxApiError::from_status(502, "jobs/1/", "bad gateway"),
            AwxApiError::ServerError { status: 502, .. }
        ));
        assert!(matches!(
            AwxApiError::from_status(409, "jobs/1/", "conflict"),
            AwxApiError::GenericHttpError { status: 409, .. }
        ));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            AwxApiError::from_status(404, "hosts/9/", "").to_string(),
            "Resource not found: hosts/9/"
        );
        assert_eq!(
            AwxApiError::AuthFailed.to_string(),
            "Authentication failed - check credentials"
        );
        assert_eq!(
            AwxApiError::from_status(418, "x/", "teapot").to_string(),
            "HTTP 418: teapot"
        );
        assert_eq!(
            AwxApiError::ConnectionFailed("https://awx.example.com".into()).to_string(),
            "Cannot connect to AWX at https://awx.example.com"
        );
        assert_eq!(AwxApiError::Timeout(30).to_string(), "Request timeout after 30s");
    }

    #[test]
    fn test_body_truncated() {
        let body = "x".repeat(500);
        let err = AwxApiError::from_status(500, "jobs/", &body);
        assert_eq!(err.to_string(), format!("AWX server error: {}", "x".repeat(200)));
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_transport_errors_have_no_status() {
        assert_eq!(AwxApiError::Timeout(5).status(), None);
        assert_eq!(AwxApiError::RequestFailed("boom".into()).status(), None);
    }
}
