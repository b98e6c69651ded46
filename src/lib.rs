//! BarberDesk Telegram Bot
//!
//! Admin dashboard for a barbershop booking service.
//! This library provides revenue statistics, the sorted booking list,
//! confirm-then-delete moderation and a bridge to the mini-app host
//! (lifecycle, identity, haptics) with multi-language labels.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod services;
pub mod models;
pub mod database;
pub mod host;
pub mod i18n;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{BarberDeskError, Result};

// Re-export main components for easy access
pub use database::{BookingRepository, BookingStore};
pub use services::ServiceFactory;
pub use host::HostBridge;
pub use i18n::I18n;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
