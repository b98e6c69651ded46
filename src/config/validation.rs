//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use std::collections::HashSet;
use crate::models::ReferenceEntry;
use crate::utils::errors::{BarberDeskError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_catalog_config(&settings.catalog)?;
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;
    validate_theme_config(&settings.theme)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(BarberDeskError::Config(
            "Bot token is required".to_string()
        ));
    }

    if config.admin_ids.is_empty() {
        return Err(BarberDeskError::Config(
            "At least one admin ID must be configured".to_string()
        ));
    }

    Ok(())
}

/// Validate barber and service reference tables
fn validate_catalog_config(config: &super::CatalogConfig) -> Result<()> {
    validate_reference_table("barbers", &config.barbers)?;
    validate_reference_table("services", &config.services)
}

fn validate_reference_table(table: &str, entries: &[ReferenceEntry]) -> Result<()> {
    let mut seen = HashSet::new();
    for entry in entries {
        if entry.id.is_empty() {
            return Err(BarberDeskError::Config(
                format!("Entry with empty id in {} table", table)
            ));
        }
        if !seen.insert(entry.id.as_str()) {
            return Err(BarberDeskError::Config(
                format!("Duplicate id {} in {} table", entry.id, table)
            ));
        }
    }

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_language.is_empty() {
        return Err(BarberDeskError::Config(
            "Default language is required".to_string()
        ));
    }

    if config.supported_languages.is_empty() {
        return Err(BarberDeskError::Config(
            "At least one supported language is required".to_string()
        ));
    }

    if !config.supported_languages.contains(&config.default_language) {
        return Err(BarberDeskError::Config(
            "Default language must be in supported languages list".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(BarberDeskError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(BarberDeskError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

/// Validate the host theme colour (`#rrggbb`)
fn validate_theme_config(config: &super::ThemeConfig) -> Result<()> {
    let hex = config.color.strip_prefix('#').unwrap_or("");
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(BarberDeskError::Config(
            format!("Invalid theme color: {}. Expected #rrggbb", config.color)
        ));
    }

    Ok(())
}
