//! # API Error Type
//!
//! Unified error type for the command surface.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  stdin line ──► Command::from_str ── bad verb/arg ──► INVALID_COMMAND   │
//! │                      │                                                  │
//! │                      ▼                                                  │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  InventoryManager operation                                      │  │
//! │  │  CoreResult<&[Product]>                                          │  │
//! │  │         │                                                        │  │
//! │  │         ├── ValidationError ─────────────► VALIDATION_ERROR      │  │
//! │  │         ├── ProductNotFound ─────────────► NOT_FOUND             │  │
//! │  │         └── NoEditInProgress ────────────► NO_EDIT_IN_PROGRESS   │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Startup only: ConfigError ──► CONFIG_ERROR, DbError ──► INTERNAL      │
//! │  Snapshot write failures are logged by the writer and never get here.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use stockroom_core::CoreError;
use stockroom_db::DbError;

use crate::state::ConfigError;

/// Error shown to the user when a command fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Referenced product id is not in the collection
    NotFound,

    /// Name or quantity input was rejected
    ValidationError,

    /// `save` without a prior `edit`
    NoEditInProgress,

    /// Unknown verb or missing argument
    InvalidCommand,

    /// Configuration could not be loaded
    ConfigError,

    /// Anything else (database open, I/O)
    Internal,
}

impl ErrorCode {
    /// The SCREAMING_SNAKE_CASE name of this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::NoEditInProgress => "NO_EDIT_IN_PROGRESS",
            ErrorCode::InvalidCommand => "INVALID_COMMAND",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an invalid command error.
    pub fn invalid_command(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidCommand, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::NoEditInProgress => ApiError::new(
                ErrorCode::NoEditInProgress,
                "No edit in progress (use `edit <id>` first)",
            ),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                ApiError::internal(format!("Database connection failed: {}", e))
            }
            DbError::MigrationFailed(e) => {
                tracing::error!("Database migration failed: {}", e);
                ApiError::internal(format!("Database migration failed: {}", e))
            }
            other => {
                tracing::error!("Database error: {}", other);
                ApiError::internal(other.to_string())
            }
        }
    }
}

/// Converts configuration errors to API errors.
impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::internal(format!("I/O error: {}", err))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================
