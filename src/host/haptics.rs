//! Haptic feedback vocabulary of the mini-app host

use serde::{Deserialize, Serialize};

/// Which haptic channel a caller asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HapticKind {
    Selection,
    Impact,
    Notification,
}

/// Loose style argument as accepted from callers
///
/// Impact uses light/medium/heavy, notification uses success/error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HapticStyle {
    Light,
    Medium,
    Heavy,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImpactStyle {
    #[default]
    Light,
    Medium,
    Heavy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationType {
    #[default]
    Success,
    Error,
}

/// A fully resolved haptic pulse, ready for the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticFeedback {
    Selection,
    Impact(ImpactStyle),
    Notification(NotificationType),
}

impl HapticFeedback {
    /// Resolve a kind and optional style into a concrete pulse
    ///
    /// A missing style, or one that belongs to another kind, falls back to
    /// the kind's default (light impact, success notification).
    pub fn resolve(kind: HapticKind, style: Option<HapticStyle>) -> Self {
        match kind {
            HapticKind::Selection => HapticFeedback::Selection,
            HapticKind::Impact => HapticFeedback::Impact(match style {
                Some(HapticStyle::Medium) => ImpactStyle::Medium,
                Some(HapticStyle::Heavy) => ImpactStyle::Heavy,
                _ => ImpactStyle::Light,
            }),
            HapticKind::Notification => HapticFeedback::Notification(match style {
                Some(HapticStyle::Error) => NotificationType::Error,
                _ => NotificationType::Success,
            }),
        }
    }
}

impl ImpactStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactStyle::Light => "light",
            ImpactStyle::Medium => "medium",
            ImpactStyle::Heavy => "heavy",
        }
    }
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Success => "success",
            NotificationType::Error => "error",
        }
    }
}
