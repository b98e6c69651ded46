//! Test data helpers for creating bookings, settings and Telegram updates

use serde_json::json;
use teloxide::types::{CallbackQuery, Message};
use BarberDesk::config::{CatalogConfig, Settings};
use BarberDesk::i18n::I18n;
use BarberDesk::models::{Booking, BookingStatus, ReferenceEntry};

pub const TEST_BOT_TOKEN: &str = "12345:test_token";
pub const ADMIN_ID: i64 = 555000111;
pub const STRANGER_ID: i64 = 987654321;

/// Builder for bookings with sensible confirmed defaults
pub struct BookingBuilder {
    booking: Booking,
}

pub fn booking(id: &str) -> BookingBuilder {
    BookingBuilder {
        booking: Booking {
            id: id.to_string(),
            client_name: format!("Client {}", id),
            client_phone: Some("+79000000000".to_string()),
            tg_username: None,
            date: "2024-05-01".to_string(),
            time_slot: "2024-05-01T10:00:00".to_string(),
            barber_id: "b1".to_string(),
            service_id: "s1".to_string(),
            price: Some(1000),
            status: BookingStatus::Confirmed,
        },
    }
}

impl BookingBuilder {
    pub fn client(mut self, name: &str) -> Self {
        self.booking.client_name = name.to_string();
        self
    }

    pub fn phone(mut self, phone: Option<&str>) -> Self {
        self.booking.client_phone = phone.map(str::to_string);
        self
    }

    pub fn username(mut self, username: &str) -> Self {
        self.booking.tg_username = Some(username.to_string());
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.booking.date = date.to_string();
        self
    }

    pub fn time_slot(mut self, slot: &str) -> Self {
        self.booking.time_slot = slot.to_string();
        self
    }

    pub fn barber(mut self, id: &str) -> Self {
        self.booking.barber_id = id.to_string();
        self
    }

    pub fn service(mut self, id: &str) -> Self {
        self.booking.service_id = id.to_string();
        self
    }

    pub fn price(mut self, price: Option<u64>) -> Self {
        self.booking.price = price;
        self
    }

    pub fn status(mut self, status: BookingStatus) -> Self {
        self.booking.status = status;
        self
    }

    pub fn build(self) -> Booking {
        self.booking
    }
}

pub fn test_catalog() -> CatalogConfig {
    CatalogConfig {
        barbers: vec![
            ReferenceEntry::new("b1", "Артур"),
            ReferenceEntry::new("b2", "Тимур"),
        ],
        services: vec![
            ReferenceEntry::new("s1", "Мужская стрижка"),
            ReferenceEntry::new("s2", "Стрижка бороды"),
        ],
    }
}

pub fn test_settings(admin_ids: Vec<i64>) -> Settings {
    let mut settings = Settings::default();
    settings.bot.token = TEST_BOT_TOKEN.to_string();
    settings.bot.admin_ids = admin_ids;
    settings.catalog = test_catalog();
    settings.i18n.translations_dir = format!("{}/translations", env!("CARGO_MANIFEST_DIR"));
    settings
}

/// Translations shipped with the crate
pub async fn load_i18n() -> I18n {
    let settings = test_settings(vec![]);
    let mut i18n = I18n::new(&settings.i18n);
    i18n.load_translations().await.expect("Failed to load translations");
    i18n
}

fn user_json(user_id: i64, language_code: &str) -> serde_json::Value {
    json!({
        "id": user_id,
        "is_bot": false,
        "first_name": "Test",
        "last_name": "User",
        "username": "testuser",
        "language_code": language_code
    })
}

fn message_json(message_id: i32, user_id: i64, text: &str, language_code: &str) -> serde_json::Value {
    json!({
        "message_id": message_id,
        "date": 1714550400,
        "chat": {
            "id": user_id,
            "type": "private",
            "first_name": "Test",
            "username": "testuser"
        },
        "from": user_json(user_id, language_code),
        "text": text
    })
}

/// A private-chat text message from `user_id`
pub fn create_test_message(user_id: i64, text: &str, language_code: &str) -> Message {
    serde_json::from_value(message_json(1, user_id, text, language_code))
        .expect("Failed to build test message")
}

/// A callback query pressed on message 77 of the sender's private chat
pub fn create_test_callback_query(user_id: i64, data: &str, language_code: &str) -> CallbackQuery {
    serde_json::from_value(json!({
        "id": format!("callback_{}", user_id),
        "from": user_json(user_id, language_code),
        "message": message_json(77, user_id, "Dashboard", language_code),
        "chat_instance": "test_chat_instance",
        "data": data
    }))
    .expect("Failed to build test callback query")
}
