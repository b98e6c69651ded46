//! Booking model

use serde::{Deserialize, Serialize};

/// A booking as delivered by the external booking store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub client_name: String,
    #[serde(default)]
    pub client_phone: Option<String>,
    #[serde(default)]
    pub tg_username: Option<String>,
    pub date: String,
    pub time_slot: String,
    pub barber_id: String,
    pub service_id: String,
    #[serde(default)]
    pub price: Option<u64>,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
    Completed,
    #[serde(other)]
    Unknown,
}

impl Booking {
    /// Only confirmed bookings count towards stats and the admin listing
    pub fn is_active(&self) -> bool {
        self.status == BookingStatus::Confirmed
    }

    /// Price with a missing value treated as zero
    pub fn amount(&self) -> u64 {
        self.price.unwrap_or(0)
    }
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Pending => "pending",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
            BookingStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
