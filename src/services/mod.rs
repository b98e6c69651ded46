//! Services module
//!
//! This module contains business logic services

pub mod dashboard;
pub mod deletion;
pub mod stats;

// Re-export commonly used services
pub use dashboard::{AdminAction, BookingCard, DashboardButton, DashboardView, RenderedDashboard};
pub use deletion::{DeleteConfirmation, DeleteOutcome};
pub use stats::{DashboardStats, compute_stats, compute_stats_on, list_confirmed_sorted_by_date_desc};

use std::sync::Arc;
use crate::config::settings::Settings;
use crate::database::BookingStore;
use crate::utils::errors::{BarberDeskError, Result};

/// Service factory holding the shared collaborators of every handler
#[derive(Clone)]
pub struct ServiceFactory {
    pub settings: Arc<Settings>,
    pub store: Arc<dyn BookingStore>,
}

impl ServiceFactory {
    /// Create a new ServiceFactory
    pub fn new(settings: Settings, store: Arc<dyn BookingStore>) -> Self {
        Self {
            settings: Arc::new(settings),
            store,
        }
    }

    /// Allow only configured admins past the dashboard
    pub fn authorize_admin(&self, user_id: i64) -> Result<()> {
        if self.settings.is_admin(user_id) {
            Ok(())
        } else {
            Err(BarberDeskError::PermissionDenied(format!("user {} is not an admin", user_id)))
        }
    }
}
