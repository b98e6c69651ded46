//! Error handling for BarberDesk
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for BarberDesk application
#[derive(Error, Debug)]
pub enum BarberDeskError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Booking not found: {booking_id}")]
    BookingNotFound { booking_id: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Failures reported by a mini-app host capability.
///
/// These never leave the host bridge: the bridge logs them and carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("host capability does not support {0}")]
    Unsupported(&'static str),

    #[error("host call {call} failed: {reason}")]
    CallFailed { call: &'static str, reason: String },
}

/// Result type alias for BarberDesk operations
pub type Result<T> = std::result::Result<T, BarberDeskError>;

/// Result type alias for host capability calls
pub type HostResult<T> = std::result::Result<T, HostError>;

impl BarberDeskError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            BarberDeskError::Telegram(_) => true,
            BarberDeskError::Config(_) => false,
            BarberDeskError::ConfigSource(_) => false,
            BarberDeskError::PermissionDenied(_) => false,
            BarberDeskError::BookingNotFound { .. } => true,
            BarberDeskError::Serialization(_) => false,
            BarberDeskError::Io(_) => true,
            BarberDeskError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BarberDeskError::Config(_) => ErrorSeverity::Critical,
            BarberDeskError::ConfigSource(_) => ErrorSeverity::Critical,
            BarberDeskError::PermissionDenied(_) => ErrorSeverity::Warning,
            BarberDeskError::BookingNotFound { .. } => ErrorSeverity::Warning,
            BarberDeskError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
