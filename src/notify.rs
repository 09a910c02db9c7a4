//! Transient user notifications.
//!
//! One capability shared by every flow; the shell owns the toast mechanics
//! (placement, animation, auto-dismiss). The core only says what happened
//! and how severe it was.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Error,
}

pub trait Notifier {
    fn notify(&mut self, severity: Severity, message: &str);
}

/// Recording notifier for tests.
#[derive(Clone, Debug, Default)]
pub struct MockNotifier {
    pub messages: Vec<(Severity, String)>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&(Severity, String)> {
        self.messages.last()
    }
}

impl Notifier for MockNotifier {
    fn notify(&mut self, severity: Severity, message: &str) {
        self.messages.push((severity, message.to_string()));
    }
}
