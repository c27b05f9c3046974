//! Timing of a single model call.

use std::{
    hint::black_box,
    time::{Duration, Instant},
};

use tandem_core::Model;

/// The elapsed time and output of one model call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timed<O> {
    /// Wall-clock time spent inside the call.
    pub elapsed: Duration,

    /// The value the model returned.
    pub output: O,
}

impl<O> Timed<O> {
    /// Returns the elapsed time in fractional seconds.
    #[must_use]
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Calls `model` exactly once with `input` and times the call.
///
/// The clock is a monotonic [`Instant`] read immediately before and after the
/// call, so the elapsed time is never negative. Input and result pass through
/// [`black_box`] to keep the compiler from moving work out of the timed
/// region.
///
/// There is no retry or timeout. A panic in the model unwinds through this
/// function untouched.
///
/// # Errors
///
/// Returns the model's own error, unchanged, if the call fails.
pub fn measure<M: Model>(model: &M, input: &M::Input) -> Result<Timed<M::Output>, M::Error> {
    let start = Instant::now();
    let result = black_box(model.call(black_box(input)));
    let elapsed = start.elapsed();

    result.map(|output| Timed { elapsed, output })
}
