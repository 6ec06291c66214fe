//! # Covid Data
//!
//! Turns county, state and country CSV rows into a [`Registry`] of
//! cumulative case and death time series keyed by region and sub-region.
//!
//! Rows are parsed by a [`RecordParser`] driven by the column layout of
//! each [`Granularity`](covid_common::Granularity), appended to the registry
//! in input order, and counted in [`IngestStats`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod ingest;
pub mod record;
pub mod registry;

pub use ingest::*;
pub use record::*;
pub use registry::*;
