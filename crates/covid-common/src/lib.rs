//! # Covid Common
//!
//! Shared types, errors, logging and utilities for covid-charts.
//!
//! This crate provides the foundational types used across all other crates
//! in the workspace: the [`Granularity`] of an input file, the error type,
//! and the tracing subscriber setup.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{CovidError, Result};
pub use logging::{init_logging, LoggingConfig};
pub use types::*;
pub use utils::*;
