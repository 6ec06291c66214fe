//! # Covid Graphs
//!
//! Rolling 7-day charts for the series held in a
//! [`Registry`](covid_data::Registry).
//!
//! [`RollingSeries`] turns cumulative counts into weekly new counts,
//! [`ChartMetadata`] names each chart and its file, and [`GraphManager`]
//! walks the registry and hands every chart to a [`ChartRenderer`]. The
//! [`PlottersRenderer`] writes PNG files with plotters.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod chart;
pub mod manager;
pub mod renderer;
pub mod rolling;

pub use chart::*;
pub use manager::*;
pub use renderer::*;
pub use rolling::*;
