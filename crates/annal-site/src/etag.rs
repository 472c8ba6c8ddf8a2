//! ETag computation for the event document.
//!
//! ETags are SHA-256 hashes over the document bytes exactly as served, so
//! any edit to the file on disk produces a new tag.

use sha2::{Digest, Sha256};

/// Compute a strong, quoted ETag for a document body.
pub fn compute_etag(body: &[u8]) -> String {
  let mut hasher = Sha256::new();
  hasher.update(body);
  format!("\"{}\"", hex::encode(hasher.finalize()))
}

/// `If-None-Match` check for conditional GET. Matches the exact quoted tag
/// or `*`; the header may carry a comma-separated list.
pub fn none_match(header: Option<&str>, etag: &str) -> bool {
  let Some(header) = header else {
    return false;
  };
  header
    .split(',')
    .map(str::trim)
    .any(|candidate| candidate == "*" || candidate == etag)
}
