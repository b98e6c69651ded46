//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the BarberDesk application.

use tracing::{info, warn, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{BarberDeskError, HostError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer on drop, so keep it alive
/// for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "barberdesk.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| BarberDeskError::Config(format!("Invalid log filter {}: {}", config.level, e)))?;

    let (json_file, plain_file) = if config.json {
        (Some(tracing_subscriber::fmt::layer().json().with_writer(non_blocking)), None)
    } else {
        (None, Some(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking)))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(json_file)
        .with(plain_file)
        .try_init()
        .map_err(|e| BarberDeskError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log admin actions
pub fn log_admin_action(admin_id: i64, action: &str, target: Option<&str>, details: Option<&str>) {
    warn!(
        admin_id = admin_id,
        action = action,
        target = target,
        details = details,
        "Admin action performed"
    );
}

/// Log a host capability call that failed or is not supported
pub fn log_host_failure(step: &str, error: &HostError) {
    match error {
        HostError::Unsupported(_) => {
            debug!(step = step, error = %error, "Host step skipped");
        }
        HostError::CallFailed { .. } => {
            warn!(step = step, error = %error, "Host call failed, continuing");
        }
    }
}

/// Log a booking removal that went through the confirmation flow
pub fn log_booking_deleted(booking_id: &str, confirmed_by: Option<i64>) {
    info!(
        booking_id = booking_id,
        confirmed_by = confirmed_by,
        "Booking deleted after confirmation"
    );
}
