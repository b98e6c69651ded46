//! Best-effort adapter over the mini-app host capabilities

use tracing::{debug, warn};
use crate::config::ThemeConfig;
use crate::utils::errors::{HostError, HostResult};
use crate::utils::logging::log_host_failure;
use super::{
    Capability, DEFAULT_THEME_COLOR, Haptics, HapticFeedback, HapticKind, HapticStyle, HostUser,
    Identity, Lifecycle,
};

/// One step of the host start-up sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStep {
    Ready,
    Expand,
    HeaderColor,
    BackgroundColor,
    ClosingConfirmation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Done,
    Skipped,
    Failed,
}

/// What happened to each start-up step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    pub steps: Vec<(InitStep, StepOutcome)>,
}

impl InitReport {
    pub fn outcome(&self, step: InitStep) -> Option<StepOutcome> {
        self.steps.iter().find(|(s, _)| *s == step).map(|(_, outcome)| *outcome)
    }

    pub fn failed(&self) -> usize {
        self.steps.iter().filter(|(_, outcome)| *outcome == StepOutcome::Failed).count()
    }

    fn record(&mut self, step: InitStep, name: &str, result: HostResult<()>) {
        let outcome = match result {
            Ok(()) => StepOutcome::Done,
            Err(e @ HostError::Unsupported(_)) => {
                log_host_failure(name, &e);
                StepOutcome::Skipped
            }
            Err(e) => {
                log_host_failure(name, &e);
                StepOutcome::Failed
            }
        };
        self.steps.push((step, outcome));
    }
}

/// Host bridge with every capability injected separately
pub struct HostBridge {
    lifecycle: Capability<dyn Lifecycle>,
    identity: Capability<dyn Identity>,
    haptics: Capability<dyn Haptics>,
    theme_color: String,
}

impl Default for HostBridge {
    fn default() -> Self {
        Self::absent()
    }
}

impl HostBridge {
    /// A bridge for an environment with no host at all
    pub fn absent() -> Self {
        Self {
            lifecycle: Capability::Unavailable,
            identity: Capability::Unavailable,
            haptics: Capability::Unavailable,
            theme_color: DEFAULT_THEME_COLOR.to_string(),
        }
    }

    pub fn with_lifecycle(mut self, lifecycle: impl Lifecycle + 'static) -> Self {
        self.lifecycle = Capability::Available(Box::new(lifecycle));
        self
    }

    pub fn with_identity(mut self, identity: impl Identity + 'static) -> Self {
        self.identity = Capability::Available(Box::new(identity));
        self
    }

    pub fn with_haptics(mut self, haptics: impl Haptics + 'static) -> Self {
        self.haptics = Capability::Available(Box::new(haptics));
        self
    }

    pub fn with_theme_color(mut self, color: impl Into<String>) -> Self {
        self.theme_color = color.into();
        self
    }

    /// Apply the configured theme
    pub fn with_theme(self, theme: &ThemeConfig) -> Self {
        self.with_theme_color(theme.color.as_str())
    }

    /// Colour applied to the host header and background on init
    pub fn theme_color(&self) -> &str {
        &self.theme_color
    }

    /// Signal readiness, expand, apply the theme and guard against closing
    ///
    /// Every step runs regardless of how the previous one went.
    pub fn init_host_app(&self) -> InitReport {
        let mut report = InitReport::default();

        let Some(host) = self.lifecycle.get() else {
            debug!("No host lifecycle capability, skipping init");
            return report;
        };

        let color = self.theme_color.as_str();
        report.record(InitStep::Ready, "ready", host.ready());
        report.record(InitStep::Expand, "expand", host.expand());
        report.record(InitStep::HeaderColor, "setHeaderColor", host.set_header_color(color));
        report.record(InitStep::BackgroundColor, "setBackgroundColor", host.set_background_color(color));
        report.record(
            InitStep::ClosingConfirmation,
            "enableClosingConfirmation",
            host.enable_closing_confirmation(),
        );

        if report.failed() > 0 {
            warn!(failed = report.failed(), "Host init finished with failures");
        } else {
            debug!("Host init finished");
        }

        report
    }

    /// Current host user, if the host exposes one
    pub fn host_user(&self) -> Option<HostUser> {
        let identity = self.identity.get()?;
        match identity.current_user() {
            Ok(user) => user,
            Err(e) => {
                log_host_failure("currentUser", &e);
                None
            }
        }
    }

    /// Fire a haptic pulse; silently does nothing when haptics are missing or fail
    pub fn trigger_haptic(&self, kind: HapticKind, style: Option<HapticStyle>) {
        let Some(haptics) = self.haptics.get() else {
            return;
        };

        let result = match HapticFeedback::resolve(kind, style) {
            HapticFeedback::Selection => haptics.selection_changed(),
            HapticFeedback::Impact(style) => haptics.impact_occurred(style),
            HapticFeedback::Notification(kind) => haptics.notification_occurred(kind),
        };

        if let Err(e) = result {
            debug!(error = %e, "Haptic feedback ignored");
        }
    }
}
