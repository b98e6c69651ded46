//! Mini-app host bridge
//!
//! The host messaging platform exposes lifecycle, identity and haptics
//! capabilities to a mini-app. Any of them may be missing, so each one is
//! injected on its own and every call through the bridge is best-effort.

pub mod bridge;
pub mod haptics;
pub mod identity;

pub use bridge::{HostBridge, InitReport, InitStep, StepOutcome};
pub use haptics::{HapticFeedback, HapticKind, HapticStyle, ImpactStyle, NotificationType};
pub use identity::{HostUser, InitDataIdentity, StaticIdentity};

use crate::utils::errors::HostResult;

/// Header and background colour applied on init
pub const DEFAULT_THEME_COLOR: &str = "#09090b";

/// Window lifecycle calls of the host
///
/// A host that lacks a single call returns [`HostError::Unsupported`] for it.
///
/// [`HostError::Unsupported`]: crate::utils::errors::HostError::Unsupported
pub trait Lifecycle: Send + Sync {
    fn ready(&self) -> HostResult<()>;
    fn expand(&self) -> HostResult<()>;
    fn set_header_color(&self, color: &str) -> HostResult<()>;
    fn set_background_color(&self, color: &str) -> HostResult<()>;
    fn enable_closing_confirmation(&self) -> HostResult<()>;
}

/// Who the host says is using the app
pub trait Identity: Send + Sync {
    fn current_user(&self) -> HostResult<Option<HostUser>>;
}

/// Haptic engine of the host device
pub trait Haptics: Send + Sync {
    fn impact_occurred(&self, style: ImpactStyle) -> HostResult<()>;
    fn notification_occurred(&self, kind: NotificationType) -> HostResult<()>;
    fn selection_changed(&self) -> HostResult<()>;
}

/// A host capability that is either present or explicitly missing
pub enum Capability<T: ?Sized> {
    Available(Box<T>),
    Unavailable,
}

impl<T: ?Sized> Capability<T> {
    pub fn get(&self) -> Option<&T> {
        match self {
            Capability::Available(inner) => Some(inner.as_ref()),
            Capability::Unavailable => None,
        }
    }

}
