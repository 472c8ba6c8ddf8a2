//! The `SubscriberStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `annal-sheets`).
//! The HTTP layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::subscriber::{NewSubscriber, SubscribeOutcome};

/// Abstraction over a subscriber list backend.
///
/// The method returns a `Send` future so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait SubscriberStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Append `subscriber` to the list unless an entry with the same email
  /// already exists. Duplicate detection is by exact email match.
  fn subscribe(
    &self,
    subscriber: NewSubscriber,
  ) -> impl Future<Output = Result<SubscribeOutcome, Self::Error>> + Send + '_;
}
