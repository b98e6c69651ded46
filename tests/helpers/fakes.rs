//! Recording fakes for the host capabilities and the booking store

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use BarberDesk::database::{BookingRepository, BookingStore};
use BarberDesk::host::{Haptics, ImpactStyle, Lifecycle, NotificationType};
use BarberDesk::models::Booking;
use BarberDesk::utils::errors::{HostError, HostResult, Result};

/// Shared, ordered log of host calls
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn push(&self, call: impl Into<String>) {
        self.0.lock().unwrap().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// Host that records every call it receives
///
/// Calls marked unsupported are rejected without being recorded; calls
/// marked failing are recorded and then fail.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    log: CallLog,
    unsupported: HashSet<&'static str>,
    failing: HashSet<&'static str>,
}

impl RecordingHost {
    pub fn new(log: CallLog) -> Self {
        Self { log, ..Self::default() }
    }

    pub fn unsupported(mut self, call: &'static str) -> Self {
        self.unsupported.insert(call);
        self
    }

    pub fn failing(mut self, call: &'static str) -> Self {
        self.failing.insert(call);
        self
    }

    fn call(&self, name: &'static str, arg: Option<&str>) -> HostResult<()> {
        if self.unsupported.contains(name) {
            return Err(HostError::Unsupported(name));
        }

        match arg {
            Some(arg) => self.log.push(format!("{}({})", name, arg)),
            None => self.log.push(name),
        }

        if self.failing.contains(name) {
            return Err(HostError::CallFailed {
                call: name,
                reason: "injected failure".to_string(),
            });
        }

        Ok(())
    }
}

impl Lifecycle for RecordingHost {
    fn ready(&self) -> HostResult<()> {
        self.call("ready", None)
    }

    fn expand(&self) -> HostResult<()> {
        self.call("expand", None)
    }

    fn set_header_color(&self, color: &str) -> HostResult<()> {
        self.call("setHeaderColor", Some(color))
    }

    fn set_background_color(&self, color: &str) -> HostResult<()> {
        self.call("setBackgroundColor", Some(color))
    }

    fn enable_closing_confirmation(&self) -> HostResult<()> {
        self.call("enableClosingConfirmation", None)
    }
}

impl Haptics for RecordingHost {
    fn impact_occurred(&self, style: ImpactStyle) -> HostResult<()> {
        self.call("impactOccurred", Some(style.as_str()))
    }

    fn notification_occurred(&self, kind: NotificationType) -> HostResult<()> {
        self.call("notificationOccurred", Some(kind.as_str()))
    }

    fn selection_changed(&self) -> HostResult<()> {
        self.call("selectionChanged", None)
    }
}

/// Booking store that counts how often it is hit
#[derive(Debug, Default)]
pub struct CountingStore {
    pub inner: BookingRepository,
    lists: AtomicUsize,
    deletes: AtomicUsize,
}

impl CountingStore {
    pub fn new(bookings: Vec<Booking>) -> Self {
        Self {
            inner: BookingRepository::with_bookings(bookings),
            ..Self::default()
        }
    }

    pub fn list_calls(&self) -> usize {
        self.lists.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BookingStore for CountingStore {
    async fn list_bookings(&self) -> Result<Vec<Booking>> {
        self.lists.fetch_add(1, Ordering::SeqCst);
        self.inner.list_bookings().await
    }

    async fn delete_booking(&self, booking_id: &str) -> Result<()> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete_booking(booking_id).await
    }
}
