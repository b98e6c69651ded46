//! Callback query handlers module
//!
//! This module contains handlers for all inline keyboard button callbacks

use teloxide::{Bot, types::{CallbackQuery, ChatId}, prelude::*};
use tracing::{debug, warn, error};
use crate::handlers::{commands::admin, operator_bridge};
use crate::i18n::I18n;
use crate::services::{AdminAction, ServiceFactory};
use crate::utils::errors::{BarberDeskError, Result};

/// Main callback query dispatcher
pub async fn handle_callback_query(
    bot: Bot,
    query: CallbackQuery,
    services: &ServiceFactory,
    i18n: &I18n,
) -> Result<()> {
    let operator = operator_bridge(Some(&query.from), &services.settings.theme)
        .host_user()
        .ok_or_else(|| BarberDeskError::InvalidInput("No user in callback query".to_string()))?;
    let message = query.message.as_ref();
    let chat_id = message.map(|m| m.chat().id).unwrap_or(ChatId(operator.id));
    let message_id = message.map(|m| m.id());

    debug!(user_id = operator.id, chat_id = ?chat_id, callback_data = ?query.data, "Processing callback query");

    // Answer first to clear the loading state on the button
    if let Err(e) = bot.answer_callback_query(query.id.clone()).await {
        warn!(error = %e, callback_id = %query.id, "Failed to answer callback query");
    }

    let Some(data) = query.data.as_deref() else {
        return Ok(());
    };

    match AdminAction::parse(data) {
        Some(action) => {
            let user_id = operator.id;
            if let Err(e) = admin::handle_admin_callback(
                bot,
                chat_id,
                message_id,
                operator,
                action,
                services,
                i18n,
            ).await {
                error!(user_id = user_id, callback_data = %data, error = %e, "Admin callback failed");
                return Err(e);
            }
        }
        None => {
            warn!(user_id = operator.id, callback_data = %data, "Unknown callback action");
        }
    }

    Ok(())
}
