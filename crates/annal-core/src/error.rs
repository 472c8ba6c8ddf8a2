//! Error types for `annal-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("event document is malformed: {0}")]
  Malformed(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
