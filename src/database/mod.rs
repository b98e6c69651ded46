//! Database module
//!
//! This module defines the booking store seam and its in-memory implementation

pub mod repositories;
pub mod store;

// Re-export commonly used database components
pub use repositories::BookingRepository;
pub use store::BookingStore;
