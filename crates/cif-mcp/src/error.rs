//! Error types for the CIF lookup MCP server.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::time::Duration;

/// Errors from the material repository layer (COD HTTP client).
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Middleware error
    #[error("Middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// Lookup did not finish in time
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }
}

/// Coarse failure category of a [`ToolError`].
///
/// The wire contract collapses every failure into one `Error: ...` text block;
/// this tag keeps the category inspectable in code and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolErrorKind {
    /// A required argument was absent
    MissingArgument,
    /// An argument was present but unusable
    Validation,
    /// Arguments or payload did not (de)serialize
    Serialization,
}

/// Errors from MCP tool execution.
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    /// A required argument was not supplied
    #[error("Missing required argument: {field}")]
    MissingArgument {
        /// Name of the missing argument
        field: String,
    },

    /// Input validation failed
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a missing argument error.
    #[must_use]
    pub fn missing_argument(field: impl Into<String>) -> Self {
        Self::MissingArgument { field: field.into() }
    }

    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Failure category, for callers that must branch on the cause.
    #[must_use]
    pub const fn kind(&self) -> ToolErrorKind {
        match self {
            Self::MissingArgument { .. } => ToolErrorKind::MissingArgument,
            Self::Validation { .. } => ToolErrorKind::Validation,
            Self::Serialization(_) => ToolErrorKind::Serialization,
        }
    }

    /// Convert to a user-friendly error message for MCP response.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::MissingArgument { field } => {
                format!("Missing required argument '{field}'")
            }
            Self::Validation { field, message } => {
                format!("Invalid input for '{field}': {message}")
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias for repository operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;
