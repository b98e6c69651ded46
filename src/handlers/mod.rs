//! Bot handlers module
//!
//! This module contains all Telegram bot handlers organized by type:
//! - Command handlers for bot commands
//! - Callback handlers for inline keyboard interactions

pub mod commands;
pub mod callbacks;

// Re-export commonly used handler functions
pub use commands::*;
pub use callbacks::*;

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, User};
use crate::config::ThemeConfig;
use crate::host::{HostBridge, HostUser, StaticIdentity};
use crate::services::DashboardButton;

/// Host bridge for the sender of a bot update
///
/// Inside a chat the only host capability is identity; lifecycle and
/// haptics stay unavailable.
pub fn operator_bridge(sender: Option<&User>, theme: &ThemeConfig) -> HostBridge {
    HostBridge::absent()
        .with_theme(theme)
        .with_identity(StaticIdentity::new(sender.map(HostUser::from)))
}

/// Convert framework-independent button rows into a Telegram keyboard
pub fn to_inline_keyboard(rows: &[Vec<DashboardButton>]) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(rows.iter().map(|row| {
        row.iter()
            .map(|button| InlineKeyboardButton::callback(button.label.clone(), button.action.to_callback_data()))
            .collect::<Vec<_>>()
    }))
}
