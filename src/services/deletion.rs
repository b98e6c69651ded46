//! Confirm-then-delete flow for bookings
//!
//! Removing a booking is a two-step exchange: the operator is shown a
//! [`DeleteConfirmation`], answers yes or no, and only a yes reaches the
//! booking store.

use tracing::info;
use crate::database::BookingStore;
use crate::utils::errors::Result;
use crate::utils::logging::log_booking_deleted;

/// Translation key of the confirmation prompt
pub const CONFIRM_PROMPT_KEY: &str = "admin.delete.confirm_prompt";

/// A pending request to delete one booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation {
    booking_id: String,
}

/// How a confirmation was resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted { booking_id: String },
    Cancelled { booking_id: String },
}

impl DeleteConfirmation {
    pub fn new(booking_id: impl Into<String>) -> Self {
        Self { booking_id: booking_id.into() }
    }

    pub fn booking_id(&self) -> &str {
        &self.booking_id
    }

    pub fn prompt_key(&self) -> &'static str {
        CONFIRM_PROMPT_KEY
    }

    /// Act on the operator's answer
    ///
    /// `confirmed_by` is only used for the audit log.
    pub async fn resolve<S>(self, confirmed: bool, store: &S, confirmed_by: Option<i64>) -> Result<DeleteOutcome>
    where
        S: BookingStore + ?Sized,
    {
        if !confirmed {
            info!(booking_id = %self.booking_id, "Booking deletion cancelled by operator");
            return Ok(DeleteOutcome::Cancelled { booking_id: self.booking_id });
        }

        store.delete_booking(&self.booking_id).await?;
        log_booking_deleted(&self.booking_id, confirmed_by);

        Ok(DeleteOutcome::Deleted { booking_id: self.booking_id })
    }
}

impl DeleteOutcome {
    pub fn booking_id(&self) -> &str {
        match self {
            DeleteOutcome::Deleted { booking_id } | DeleteOutcome::Cancelled { booking_id } => booking_id,
        }
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted { .. })
    }
}
