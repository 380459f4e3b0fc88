//! Section-scoped configuration API for cfgate
//!
//! This crate contains:
//! - `ConfigService`: the read and write paths over a `ConfigStore`
//! - The error taxonomy surfaced to API callers

pub mod error;
pub mod service;

pub use error::{Error, Result};
pub use service::ConfigService;
