//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod booking;

// Re-export repositories
pub use booking::BookingRepository;
