//! # Covid Charts
//!
//! Reads the county, state and national COVID-19 CSV files named in the
//! configuration and writes one rolling 7-day chart per region.
//!
//! This is the main binary crate that wires the command line, configuration,
//! ingestion and rendering together.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cli;
pub mod error;

pub use app::*;
pub use cli::*;
pub use error::*;
