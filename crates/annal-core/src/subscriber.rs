//! Subscription types shared by the HTTP layer and storage backends.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Input ───────────────────────────────────────────────────────────────────

/// A subscription request, fully resolved by the HTTP layer. Backends persist
/// it as-is; they never fill in timestamps or addresses themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSubscriber {
  pub email:         String,
  pub subscribed_at: DateTime<Utc>,
  /// Client address as reported by proxy headers, or `"unknown"`.
  pub ip:            String,
}

// ─── Outcome ─────────────────────────────────────────────────────────────────

/// Result of a subscription attempt against a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
  /// The address was appended to the list.
  Subscribed,
  /// The address was already on the list; nothing was written.
  AlreadySubscribed,
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// The only check applied to submitted addresses: a non-empty string
/// containing an `@`. Deliverability is not our problem; the sign-up form is
/// public and a bounced address costs nothing.
pub fn plausible_email(email: &str) -> bool {
  email.contains('@')
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn plausible_email_wants_an_at_sign() {
    assert!(plausible_email("a@b.example"));
    assert!(plausible_email("@"));
    assert!(!plausible_email(""));
    assert!(!plausible_email("nobody.example"));
  }
}
