//! Error types for `annal-sheets`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid service-account key: {0}")]
  Key(String),

  #[error("token exchange failed: {0}")]
  TokenExchange(String),

  #[error("sheets api error ({status}): {message}")]
  Api { status: u16, message: String },

  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
