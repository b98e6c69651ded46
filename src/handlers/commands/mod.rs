//! Command handlers module
//!
//! This module contains handlers for all bot commands like /start, /help, etc.

pub mod start;
pub mod help;
pub mod admin;

use teloxide::{Bot, types::Message, utils::command::BotCommands};
use crate::utils::errors::Result;
use crate::services::ServiceFactory;
use crate::i18n::I18n;

/// All available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "BarberDesk commands:")]
pub enum Command {
    #[command(description = "Start the bot and show welcome message")]
    Start,
    #[command(description = "Show help information")]
    Help,
    #[command(description = "Admin dashboard (admin only)")]
    Admin,
}

/// Main command dispatcher
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: &ServiceFactory,
    i18n: &I18n,
) -> Result<()> {
    match cmd {
        Command::Start => start::handle_start(bot, msg, services, i18n).await,
        Command::Help => help::handle_help(bot, msg, services, i18n).await,
        Command::Admin => admin::handle_admin_panel(bot, msg, services, i18n).await,
    }
}
