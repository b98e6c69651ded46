//! Help command handler

use teloxide::{Bot, types::Message, prelude::*};
use crate::handlers::operator_bridge;
use crate::services::ServiceFactory;
use crate::i18n::I18n;
use crate::utils::errors::Result;

/// Handle /help command
pub async fn handle_help(bot: Bot, msg: Message, services: &ServiceFactory, i18n: &I18n) -> Result<()> {
    let operator = operator_bridge(msg.from.as_ref(), &services.settings.theme).host_user();
    let lang = i18n.detect_user_language(operator.as_ref().and_then(|u| u.language_code.as_deref()));

    bot.send_message(msg.chat.id, i18n.t("commands.help.text", &lang, None)).await?;
    Ok(())
}
