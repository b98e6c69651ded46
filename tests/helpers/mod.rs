//! Test helpers module
//!
//! This module provides utilities and helpers for testing the BarberDesk application.
//! It includes a mock Telegram API, booking fixtures and recording host fakes.

#![allow(dead_code)]

pub mod fakes;
pub mod telegram_mock;
pub mod test_data;

#[allow(unused_imports)]
pub use fakes::*;
#[allow(unused_imports)]
pub use telegram_mock::*;
#[allow(unused_imports)]
pub use test_data::*;
