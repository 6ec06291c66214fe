//! # Covid Config
//!
//! Configuration for covid-charts: where the three input files live, where
//! charts are written, and how they are drawn.
//!
//! Configuration is read from YAML or TOML, then overridden by environment
//! variables, then validated.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
