//! Booking store seam
//!
//! Bookings are owned by an external store; the dashboard only reads a
//! snapshot and asks for deletions.

use async_trait::async_trait;
use crate::models::Booking;
use crate::utils::errors::Result;

#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Current snapshot of every booking, in store order
    async fn list_bookings(&self) -> Result<Vec<Booking>>;

    /// Remove a booking by id
    async fn delete_booking(&self, booking_id: &str) -> Result<()>;
}
