//! Google Sheets storage for the subscriber list.
//!
//! Authentication is the two-legged service-account flow: sign a JWT
//! assertion with the account's RSA key, exchange it at the OAuth token
//! endpoint for a bearer token, and call the Sheets REST API with that.
//! A token is minted per subscription; at sign-up-form traffic levels,
//! caching one would buy nothing.

pub mod error;
mod store;
mod token;

pub use error::{Error, Result};
pub use store::{SheetsConfig, SheetsStore};
