//! In-memory booking repository

use std::path::Path;
use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};
use crate::database::store::BookingStore;
use crate::models::Booking;
use crate::utils::errors::{BarberDeskError, Result};

/// Booking store kept in process memory
///
/// Clones share the same collection.
#[derive(Debug, Clone, Default)]
pub struct BookingRepository {
    bookings: Arc<RwLock<Vec<Booking>>>,
}

impl BookingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: Arc::new(RwLock::new(bookings)),
        }
    }

    /// Load a JSON array of bookings, as exported by the booking store
    pub async fn from_seed_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        let bookings: Vec<Booking> = serde_json::from_str(&content)?;

        info!(path = %path.display(), count = bookings.len(), "Loaded booking snapshot");
        Ok(Self::with_bookings(bookings))
    }

    /// Find booking by ID
    pub async fn find_by_id(&self, booking_id: &str) -> Option<Booking> {
        self.bookings
            .read()
            .await
            .iter()
            .find(|booking| booking.id == booking_id)
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.bookings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.bookings.read().await.is_empty()
    }
}

#[async_trait]
impl BookingStore for BookingRepository {
    async fn list_bookings(&self) -> Result<Vec<Booking>> {
        Ok(self.bookings.read().await.clone())
    }

    async fn delete_booking(&self, booking_id: &str) -> Result<()> {
        let mut bookings = self.bookings.write().await;
        let before = bookings.len();
        bookings.retain(|booking| booking.id != booking_id);

        if bookings.len() == before {
            return Err(BarberDeskError::BookingNotFound {
                booking_id: booking_id.to_string(),
            });
        }

        debug!(booking_id = booking_id, remaining = bookings.len(), "Booking removed from store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingStatus;
    use assert_matches::assert_matches;
    use std::io::Write;

    fn booking(id: &str) -> Booking {
        Booking {
            id: id.to_string(),
            client_name: "Иван".to_string(),
            client_phone: None,
            tg_username: None,
            date: "2024-05-01".to_string(),
            time_slot: "10:00".to_string(),
            barber_id: "b1".to_string(),
            service_id: "s1".to_string(),
            price: Some(1000),
            status: BookingStatus::Confirmed,
        }
    }

    #[tokio::test]
    async fn test_delete_existing_booking() {
        let repo = BookingRepository::with_bookings(vec![booking("a"), booking("b")]);

        repo.delete_booking("a").await.unwrap();

        assert_eq!(repo.len().await, 1);
        assert!(repo.find_by_id("a").await.is_none());
        assert!(repo.find_by_id("b").await.is_some());
    }

    #[tokio::test]
    async fn test_delete_missing_booking() {
        let repo = BookingRepository::with_bookings(vec![booking("a")]);

        let result = repo.delete_booking("zzz").await;

        assert_matches!(result, Err(BarberDeskError::BookingNotFound { booking_id }) if booking_id == "zzz");
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_list_returns_snapshot() {
        let repo = BookingRepository::with_bookings(vec![booking("a")]);
        let mut snapshot = repo.list_bookings().await.unwrap();
        snapshot.clear();

        assert!(!repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_from_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"x1","clientName":"Олег","date":"2024-05-02","timeSlot":"12:00","barberId":"b1","serviceId":"s1","price":800,"status":"confirmed"}}]"#
        )
        .unwrap();

        let repo = BookingRepository::from_seed_file(file.path()).await.unwrap();
        let stored = repo.find_by_id("x1").await.unwrap();
        assert_eq!(stored.client_name, "Олег");
        assert_eq!(stored.price, Some(800));
    }
}
