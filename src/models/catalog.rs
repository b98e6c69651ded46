//! Reference tables for barbers and services

use serde::{Deserialize, Serialize};

/// One row of a reference table: an id and its display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub id: String,
    pub name: String,
}

impl ReferenceEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

/// Look up the display name for `id`, echoing the id when it is unknown
pub fn resolve_name(id: &str, table: &[ReferenceEntry]) -> String {
    table
        .iter()
        .find(|entry| entry.id == id)
        .map(|entry| entry.name.clone())
        .unwrap_or_else(|| id.to_string())
}
