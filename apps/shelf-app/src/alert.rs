//! # Alerts
//!
//! Blocking, dismiss-to-continue notifications. The UI shell supplies the
//! sink that actually shows them; screens only raise them.

use serde::Serialize;
use tracing::warn;

/// A titled message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn error(message: impl Into<String>) -> Self {
        Alert {
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}

/// Where screens send alerts.
#[cfg_attr(test, mockall::automock)]
pub trait AlertSink: Send + Sync {
    fn alert(&self, alert: Alert);
}

/// Sink for headless runs: alerts become log lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAlerts;

impl AlertSink for LogAlerts {
    fn alert(&self, alert: Alert) {
        warn!(title = %alert.title, message = %alert.message, "Alert raised");
    }
}
