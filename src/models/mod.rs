//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod booking;
pub mod catalog;

// Re-export commonly used models
pub use booking::{Booking, BookingStatus};
pub use catalog::{ReferenceEntry, resolve_name};
