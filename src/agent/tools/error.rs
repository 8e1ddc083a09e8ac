//! Common error utilities for AWX tools
//!
//! Tools never surface AWX failures as `Err`: the host would only see an opaque
//! failure. Instead the error is logged with its category and rendered into the
//! tool output as a one-line message.
//!
//! ## Pattern
//!
//! Tools should:
//! 1. Declare an error type deriving `thiserror::Error` (Rig's `Tool` trait
//!    requires one; no tool currently returns it)
//! 2. Use `format_api_error` when an AWX call fails
//! 3. Use `format_validation_error` when the arguments are unusable

use std::fmt;

use crate::awx::api::AwxApiError;

/// Categories of tool failures
///
/// Used in logs so operators can tell credential problems from outages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Referenced job, host or inventory does not exist
    NotFound,
    /// Credentials were rejected
    AuthenticationFailed,
    /// Credentials lack access
    PermissionDenied,
    /// Tool arguments were invalid
    ValidationFailed,
    /// AWX could not be reached
    NetworkError,
    /// A request timed out
    Timeout,
    /// AWX answered with an error
    ServerError,
    /// Unexpected response or internal failure
    InternalError,
}

impl ErrorCategory {
    /// Returns the error code string for this category
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::AuthenticationFailed => "AUTHENTICATION_FAILED",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::ValidationFailed => "VALIDATION_FAILED",
            Self::NetworkError => "NETWORK_ERROR",
            Self::Timeout => "TIMEOUT",
            Self::ServerError => "SERVER_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Whether retrying the same call later may succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError | Self::Timeout | Self::ServerError
        )
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<&AwxApiError> for ErrorCategory {
    fn from(error: &AwxApiError) -> Self {
        match error {
            AwxApiError::NotFound(_) => Self::NotFound,
            AwxApiError::AuthFailed => Self::AuthenticationFailed,
            AwxApiError::PermissionDenied => Self::PermissionDenied,
            AwxApiError::ServerError { .. } | AwxApiError::GenericHttpError { .. } => {
                Self::ServerError
            }
            AwxApiError::ConnectionFailed(_) | AwxApiError::RequestFailed(_) => {
                Self::NetworkError
            }
            AwxApiError::Timeout(_) => Self::Timeout,
            AwxApiError::ParseError(_) => Self::InternalError,
        }
    }
}

/// Log fields describing an AWX failure, e.g. `NOT_FOUND, http=404, recoverable=false`
fn failure_fields(error: &AwxApiError) -> String {
    let category = ErrorCategory::from(error);
    match error.status() {
        Some(status) => format!(
            "{}, http={}, recoverable={}",
            category,
            status,
            category.is_recoverable()
        ),
        None => format!("{}, recoverable={}", category, category.is_recoverable()),
    }
}

/// Render an AWX failure as tool output
pub fn format_api_error(tool_name: &str, error: &AwxApiError) -> String {
    log::warn!("{} failed [{}]: {}", tool_name, failure_fields(error), error);
    format!("AWX Error: {}", error)
}

/// Render unusable tool arguments as tool output
pub fn format_validation_error(tool_name: &str, message: &str) -> String {
    log::debug!("{} rejected arguments: {}", tool_name, message);
    format!("❌ {}", message)
}
