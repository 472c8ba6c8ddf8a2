//! Core types and trait definitions for the Annal timeline.
//!
//! This crate is deliberately free of HTTP and rendering dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod error;
pub mod event;
pub mod stats;
pub mod store;
pub mod subscriber;

pub use error::{Error, Result};
