use serde::Serialize;
use std::fmt;

/// How long a notice stays up unless the caller says otherwise.
pub const DEFAULT_NOTICE_DURATION_MS: u32 = 3700;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Danger,
    Warning,
    Info,
}

/// A dismissable message for the user. Never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserNotice {
    pub alert_type: AlertType,
    pub headline: String,
    pub message: String,
    /// Milliseconds before auto-dismiss; 0 means the user has to dismiss it
    pub duration_ms: u32,
}

impl UserNotice {
    pub fn new(alert_type: AlertType, headline: &str, message: &str) -> Self {
        Self {
            alert_type,
            headline: headline.to_string(),
            message: message.to_string(),
            duration_ms: DEFAULT_NOTICE_DURATION_MS,
        }
    }

    /// Shown for report actions that are not built yet.
    pub fn under_construction() -> Self {
        Self::new(
            AlertType::Danger,
            "NOTICE:",
            "This feature is currently under construction.",
        )
    }

    pub fn sticky(mut self) -> Self {
        self.duration_ms = 0;
        self
    }
}

impl fmt::Display for UserNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.headline, self.message)
    }
}
