// src/ui/notify.rs

/// How long a toast stays visible, in milliseconds.
pub const NOTIFICATION_LIFETIME_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
  Success,
  Error,
}

/// A transient toast message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
  pub severity: Severity,
  pub summary: String,
  pub detail: String,
}

impl Notification {
  pub fn success(detail: impl Into<String>) -> Self {
    Self {
      severity: Severity::Success,
      summary: "Success".to_string(),
      detail: detail.into(),
    }
  }

  pub fn error(detail: impl Into<String>) -> Self {
    Self {
      severity: Severity::Error,
      summary: "Error".to_string(),
      detail: detail.into(),
    }
  }
}
