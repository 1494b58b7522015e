//! Common utilities for luxd-version
//!
//! This crate provides shared functionality for the node binary: the common
//! error type and tracing setup.

pub mod error;
pub mod logging;

pub use error::{Error, Result};
pub use logging::{LOG_LEVELS, log_filter, setup_logging};
