//! Core traits and types for the Tandem workspace.
//!
//! This crate defines the shared abstractions that the comparison timer and
//! the observers build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`FnModel`] — adapts a plain function or closure into a [`Model`]
//! - [`Observer`] — receives run events and optionally returns control actions
//! - [`Surface`] — receives finished results for presentation

mod model;
mod observer;
mod surface;

pub use model::{FnModel, Model, model_fn};
pub use observer::Observer;
pub use surface::Surface;
