//! Admin dashboard rendering
//!
//! Turns a booking snapshot into the dashboard message: aggregate counters,
//! the confirmed bookings list and a keyboard with one delete button per
//! listed booking. Text is produced in Telegram MarkdownV2.

use chrono::NaiveDate;
use tracing::warn;
use crate::config::CatalogConfig;
use crate::i18n::{I18n, TranslationParams};
use crate::models::{Booking, BookingStatus, resolve_name};
use crate::services::stats::{DashboardStats, compute_stats_on, list_confirmed_sorted_by_date_desc};
use crate::utils::helpers::{escape_markdown, format_amount, format_time_slot, truncate_text, utf16_len};

/// Telegram refuses messages longer than this many UTF-16 code units
pub const MESSAGE_LIMIT: usize = 4096;

/// Telegram refuses inline buttons whose callback data exceeds this many bytes
pub const CALLBACK_DATA_LIMIT: usize = 64;

const SERVICE_NAME_WIDTH: usize = 24;
const BUTTON_LABEL_WIDTH: usize = 32;

/// Callback actions carried by dashboard buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminAction {
    Refresh,
    Delete(String),
    Confirm(String),
    Cancel(String),
}

impl AdminAction {
    pub const PREFIX: &'static str = "admin";

    pub fn to_callback_data(&self) -> String {
        match self {
            AdminAction::Refresh => format!("{}:refresh", Self::PREFIX),
            AdminAction::Delete(id) => format!("{}:delete:{}", Self::PREFIX, id),
            AdminAction::Confirm(id) => format!("{}:confirm:{}", Self::PREFIX, id),
            AdminAction::Cancel(id) => format!("{}:cancel:{}", Self::PREFIX, id),
        }
    }

    /// Whether Telegram accepts this action as button callback data
    pub fn fits_callback_data(&self) -> bool {
        self.to_callback_data().len() <= CALLBACK_DATA_LIMIT
    }

    /// Parse callback data of the form `admin:<action>[:<booking id>]`
    pub fn parse(data: &str) -> Option<Self> {
        let mut parts = data.splitn(3, ':');
        if parts.next()? != Self::PREFIX {
            return None;
        }

        let action = parts.next()?;
        let id = parts.next().filter(|id| !id.is_empty()).map(str::to_string);

        match (action, id) {
            ("refresh", None) => Some(AdminAction::Refresh),
            ("delete", Some(id)) => Some(AdminAction::Delete(id)),
            ("confirm", Some(id)) => Some(AdminAction::Confirm(id)),
            ("cancel", Some(id)) => Some(AdminAction::Cancel(id)),
            _ => None,
        }
    }
}

/// Inline button independent of the bot framework
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardButton {
    pub label: String,
    pub action: AdminAction,
}

/// One booking prepared for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingCard {
    pub booking_id: String,
    pub client_name: String,
    pub client_phone: Option<String>,
    pub tg_username: Option<String>,
    pub price: u64,
    pub status: BookingStatus,
    pub date: String,
    pub time: String,
    pub barber: String,
    pub service: String,
}

impl BookingCard {
    pub fn from_booking(booking: &Booking, catalog: &CatalogConfig) -> Self {
        Self {
            booking_id: booking.id.clone(),
            client_name: booking.client_name.clone(),
            client_phone: booking.client_phone.clone().filter(|phone| !phone.is_empty()),
            tg_username: booking.tg_username.clone().filter(|name| !name.is_empty()),
            price: booking.amount(),
            status: booking.status,
            date: booking.date.clone(),
            time: format_time_slot(&booking.time_slot),
            barber: resolve_name(&booking.barber_id, &catalog.barbers),
            service: resolve_name(&booking.service_id, &catalog.services),
        }
    }
}

/// Derived dashboard contents for one snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub stats: DashboardStats,
    pub cards: Vec<BookingCard>,
}

/// Message text plus keyboard rows ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDashboard {
    pub text: String,
    pub keyboard: Vec<Vec<DashboardButton>>,
}

impl DashboardView {
    pub fn build(bookings: &[Booking], catalog: &CatalogConfig, today: NaiveDate) -> Self {
        let stats = compute_stats_on(bookings, today);
        let cards = list_confirmed_sorted_by_date_desc(bookings)
            .into_iter()
            .map(|booking| BookingCard::from_booking(booking, catalog))
            .collect();

        Self { stats, cards }
    }

    /// Render the dashboard in `lang`
    ///
    /// Cards that would push the message past [`MESSAGE_LIMIT`] are left out
    /// together with their delete buttons. The budget is measured on the
    /// escaped text, which is never shorter than what Telegram displays.
    /// A booking whose id is too long for callback data is listed without a
    /// delete button.
    pub fn render(&self, i18n: &I18n, lang: &str) -> RenderedDashboard {
        let t = |key: &str| escape_markdown(&i18n.t(key, lang, None));

        let mut text = format!(
            "🛡 *{}*\n_{}_\n\n",
            escape_markdown(&i18n.t("admin.title", lang, None).to_uppercase()),
            t("admin.subtitle"),
        );
        text.push_str(&format!(
            "💰 {}: *{}*\n👥 {}: *{}*\n📅 {}: *\\+{}* · {}: *{}*\n\n",
            t("admin.stats.total_revenue"),
            escape_markdown(&format_amount(self.stats.total_revenue)),
            t("admin.stats.total_bookings"),
            self.stats.total_active,
            t("admin.stats.today"),
            escape_markdown(&format_amount(self.stats.today_revenue)),
            t("admin.stats.today_clients"),
            self.stats.today_count,
        ));
        text.push_str(&format!("📋 *{}*\n", t("admin.list.title")));

        let mut keyboard = Vec::new();

        if self.cards.is_empty() {
            text.push_str(&format!("\n{}", t("admin.list.empty")));
        } else {
            let truncated_note = format!("\n_{}_", t("admin.list.truncated"));
            for (index, card) in self.cards.iter().enumerate() {
                let block = render_card(index + 1, card, i18n, lang);
                if utf16_len(&text) + utf16_len(&block) + utf16_len(&truncated_note) > MESSAGE_LIMIT {
                    text.push_str(&truncated_note);
                    break;
                }
                text.push_str(&block);

                if AdminAction::Confirm(card.booking_id.clone()).fits_callback_data() {
                    keyboard.push(vec![delete_button(index + 1, card, i18n, lang)]);
                } else {
                    warn!(booking_id = %card.booking_id, "Booking id too long for a delete button");
                }
            }
        }

        keyboard.push(vec![DashboardButton {
            label: format!("🔄 {}", i18n.t("admin.refresh", lang, None)),
            action: AdminAction::Refresh,
        }]);

        RenderedDashboard { text, keyboard }
    }
}

fn render_card(position: usize, card: &BookingCard, i18n: &I18n, lang: &str) -> String {
    let phone = match &card.client_phone {
        Some(phone) => escape_markdown(phone),
        None => escape_markdown(&i18n.t("admin.list.no_phone", lang, None)),
    };

    let mut block = format!("\n{}\\. *{}*\n   📞 {}\n", position, escape_markdown(&card.client_name), phone);
    if let Some(username) = &card.tg_username {
        block.push_str(&format!("   {}\n", escape_markdown(&format!("@{}", username))));
    }
    block.push_str(&format!(
        "   💵 {} · {}\n   📅 {} · 🕒 {}\n   ✂️ {} · {}\n",
        escape_markdown(&format_amount(card.price)),
        card.status,
        escape_markdown(&card.date),
        escape_markdown(&card.time),
        escape_markdown(&card.barber),
        escape_markdown(&truncate_text(&card.service, SERVICE_NAME_WIDTH)),
    ));
    block
}

fn delete_button(position: usize, card: &BookingCard, i18n: &I18n, lang: &str) -> DashboardButton {
    let mut params = TranslationParams::new();
    params.insert("client".to_string(), truncate_text(&card.client_name, BUTTON_LABEL_WIDTH));

    DashboardButton {
        label: format!("🗑 {}. {}", position, i18n.t("admin.delete.button", lang, Some(&params))),
        action: AdminAction::Delete(card.booking_id.clone()),
    }
}

/// Yes/no keyboard shown before a booking is deleted
pub fn confirmation_keyboard(booking_id: &str, i18n: &I18n, lang: &str) -> Vec<Vec<DashboardButton>> {
    vec![vec![
        DashboardButton {
            label: format!("✅ {}", i18n.t("admin.delete.yes", lang, None)),
            action: AdminAction::Confirm(booking_id.to_string()),
        },
        DashboardButton {
            label: format!("✖️ {}", i18n.t("admin.delete.no", lang, None)),
            action: AdminAction::Cancel(booking_id.to_string()),
        },
    ]]
}
