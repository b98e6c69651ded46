//! Start command handler

use teloxide::{Bot, types::Message, prelude::*};
use tracing::debug;
use crate::handlers::operator_bridge;
use crate::services::ServiceFactory;
use crate::i18n::{I18n, TranslationParams};
use crate::utils::errors::Result;

/// Handle /start command
pub async fn handle_start(bot: Bot, msg: Message, services: &ServiceFactory, i18n: &I18n) -> Result<()> {
    let operator = operator_bridge(msg.from.as_ref(), &services.settings.theme).host_user();
    let lang = i18n.detect_user_language(operator.as_ref().and_then(|u| u.language_code.as_deref()));

    let mut params = TranslationParams::new();
    params.insert(
        "name".to_string(),
        operator.as_ref().map(|u| u.display_name()).unwrap_or_default(),
    );

    debug!(user_id = ?operator.as_ref().map(|u| u.id), chat_id = ?msg.chat.id, "Processing /start command");

    bot.send_message(msg.chat.id, i18n.t("commands.start.welcome", &lang, Some(&params))).await?;
    Ok(())
}
