//! Plotting surfaces and reusable observers for comparison runs.
//!
//! # Modules
//!
//! - [`figure`] — Layout of a finished [`Comparison`]: series, match markers,
//!   axis titles, and x-axis ticks
//! - [`budget`] — [`TimeBudget`], an observer that stops a run once enough
//!   time has been spent measuring
//!
//! [`PlotSurface`] collects one [`Figure`] per comparison it is handed.
//!
//! # Features
//!
//! - `plot` — Enables [`PlotSurface::show`] for displaying figures via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Comparison`]: tandem_compare::compare::Comparison

pub mod budget;
pub mod figure;

mod surface;

#[cfg(feature = "plot")]
mod plot;

pub use budget::TimeBudget;
pub use figure::{Figure, FigureError, Label};
pub use surface::PlotSurface;

#[cfg(feature = "plot")]
pub use plot::{ShowConfig, ShowError};
