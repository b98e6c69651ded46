//! Admin command handlers

use chrono::Local;
use teloxide::{Bot, ApiError, RequestError, types::{Message, MessageId, ChatId, ParseMode}, prelude::*};
use tracing::{info, debug, warn};
use crate::handlers::{operator_bridge, to_inline_keyboard};
use crate::host::HostUser;
use crate::i18n::I18n;
use crate::services::{AdminAction, DashboardView, DeleteConfirmation, ServiceFactory};
use crate::services::dashboard::confirmation_keyboard;
use crate::utils::errors::{BarberDeskError, Result};
use crate::utils::logging::log_admin_action;

/// Handle /admin command - show the dashboard
pub async fn handle_admin_panel(
    bot: Bot,
    msg: Message,
    services: &ServiceFactory,
    i18n: &I18n,
) -> Result<()> {
    let chat_id = msg.chat.id;
    let operator = operator_bridge(msg.from.as_ref(), &services.settings.theme).host_user().ok_or_else(|| {
        BarberDeskError::InvalidInput("No user in message".to_string())
    })?;

    debug!(user_id = operator.id, chat_id = ?chat_id, "Processing /admin command");

    let lang = operator_language(&operator, i18n);
    if !ensure_admin(&bot, chat_id, &operator, services, i18n, &lang).await? {
        return Ok(());
    }

    show_dashboard(&bot, chat_id, None, services, i18n, &lang).await?;
    info!(user_id = operator.id, "Admin opened dashboard");

    Ok(())
}

/// Handle an `admin:*` inline button press
pub async fn handle_admin_callback(
    bot: Bot,
    chat_id: ChatId,
    message_id: Option<MessageId>,
    operator: HostUser,
    action: AdminAction,
    services: &ServiceFactory,
    i18n: &I18n,
) -> Result<()> {
    debug!(user_id = operator.id, action = ?action, "Admin dashboard action");

    let lang = operator_language(&operator, i18n);
    if !ensure_admin(&bot, chat_id, &operator, services, i18n, &lang).await? {
        return Ok(());
    }

    match action {
        AdminAction::Refresh => {
            show_dashboard(&bot, chat_id, message_id, services, i18n, &lang).await?;
        }
        AdminAction::Delete(booking_id) => {
            let confirmation = DeleteConfirmation::new(booking_id);
            let keyboard = confirmation_keyboard(confirmation.booking_id(), i18n, &lang);

            bot.send_message(chat_id, i18n.t(confirmation.prompt_key(), &lang, None))
                .reply_markup(to_inline_keyboard(&keyboard))
                .await?;
        }
        AdminAction::Confirm(booking_id) => {
            let outcome = DeleteConfirmation::new(booking_id.clone())
                .resolve(true, services.store.as_ref(), Some(operator.id))
                .await;

            match outcome {
                Ok(_) => {
                    log_admin_action(operator.id, "delete_booking", Some(&booking_id), None);
                    replace_prompt(&bot, chat_id, message_id, i18n.t("admin.delete.done", &lang, None)).await?;
                    show_dashboard(&bot, chat_id, None, services, i18n, &lang).await?;
                }
                Err(BarberDeskError::BookingNotFound { .. }) => {
                    warn!(user_id = operator.id, booking_id = %booking_id, "Booking vanished before deletion");
                    replace_prompt(&bot, chat_id, message_id, i18n.t("admin.delete.not_found", &lang, None)).await?;
                }
                Err(e) => return Err(e),
            }
        }
        AdminAction::Cancel(booking_id) => {
            DeleteConfirmation::new(booking_id)
                .resolve(false, services.store.as_ref(), Some(operator.id))
                .await?;
            replace_prompt(&bot, chat_id, message_id, i18n.t("admin.delete.cancelled", &lang, None)).await?;
        }
    }

    Ok(())
}

fn operator_language(operator: &HostUser, i18n: &I18n) -> String {
    i18n.detect_user_language(operator.language_code.as_deref())
}

/// Reply with an access-denied message when the operator is not an admin
async fn ensure_admin(
    bot: &Bot,
    chat_id: ChatId,
    operator: &HostUser,
    services: &ServiceFactory,
    i18n: &I18n,
    lang: &str,
) -> Result<bool> {
    match services.authorize_admin(operator.id) {
        Ok(()) => Ok(true),
        Err(e @ BarberDeskError::PermissionDenied(_)) => {
            warn!(user_id = operator.id, error = %e, "Non-admin tried to use the dashboard");
            bot.send_message(chat_id, i18n.t("admin.access_denied", lang, None)).await?;
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// Render the dashboard from a fresh snapshot, editing `message_id` when given
async fn show_dashboard(
    bot: &Bot,
    chat_id: ChatId,
    message_id: Option<MessageId>,
    services: &ServiceFactory,
    i18n: &I18n,
    lang: &str,
) -> Result<()> {
    let bookings = services.store.list_bookings().await?;
    let view = DashboardView::build(&bookings, &services.settings.catalog, Local::now().date_naive());
    let rendered = view.render(i18n, lang);
    let keyboard = to_inline_keyboard(&rendered.keyboard);

    debug!(
        bookings = bookings.len(),
        listed = rendered.keyboard.len().saturating_sub(1),
        total_revenue = view.stats.total_revenue,
        "Rendering admin dashboard"
    );

    match message_id {
        Some(message_id) => {
            let edited = bot
                .edit_message_text(chat_id, message_id, rendered.text)
                .parse_mode(ParseMode::MarkdownV2)
                .reply_markup(keyboard)
                .await;

            match edited {
                Ok(_) | Err(RequestError::Api(ApiError::MessageNotModified)) => {}
                Err(e) => return Err(e.into()),
            }
        }
        None => {
            bot.send_message(chat_id, rendered.text)
                .parse_mode(ParseMode::MarkdownV2)
                .reply_markup(keyboard)
                .await?;
        }
    }

    Ok(())
}

/// Swap the confirmation prompt for a result line, dropping its buttons
async fn replace_prompt(bot: &Bot, chat_id: ChatId, message_id: Option<MessageId>, text: String) -> Result<()> {
    match message_id {
        Some(message_id) => {
            bot.edit_message_text(chat_id, message_id, text).await?;
        }
        None => {
            bot.send_message(chat_id, text).await?;
        }
    }

    Ok(())
}
