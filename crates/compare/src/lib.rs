//! Timing comparison of two models over a sequence of labeled inputs.
//!
//! - [`measure`] times a single model call.
//! - [`compare`] drives two models over the same inputs and collects a
//!   [`Comparison`](compare::Comparison) suitable for plotting.

pub mod compare;
pub mod measure;

pub use measure::{Timed, measure};
