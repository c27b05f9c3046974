//! Side-by-side timing of two models over a sequence of labeled inputs.
//!
//! Each input item is a `(label, input)` pair. For every item the first model
//! is called, then the second model is called with the same input, and both
//! elapsed times are recorded together with the label. When the two outputs
//! compare equal the label is also recorded as matched.
//!
//! Equality is the exact `PartialEq` of the output types. Floating-point
//! results that differ only by rounding, such as `0.1 + 0.2` and `0.3`, are
//! reported as not matched.
//!
//! Each item is measured once, with no warm-up and no repeated trials.
//!
//! # Example
//!
//! ```ignore
//! use tandem_compare::compare::{self, Candidate, Config};
//!
//! let first = Candidate::new("bubble_sort", BubbleSort);
//! let second = Candidate::new("std_sort", StdSort);
//! let data = (1..=10).map(|n| (n * 100, reversed(n * 100)));
//!
//! let surface = compare::timer(&first, &second, data, &Config::default(), PlotSurface::new())?;
//! surface.show(ShowConfig::new())?;
//! ```

mod action;
mod candidate;
mod comparison;
mod config;
mod error;
mod event;

pub use action::Action;
pub use candidate::Candidate;
pub use comparison::{Comparison, Status};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;

use tandem_core::{Model, Observer, Surface};
use tracing::{debug, info};

use crate::measure;

/// Times two models over every item of `data`.
///
/// # Algorithm
///
/// For each `(label, input)` item, in yield order:
///
/// 1. Measure `first` on `input`.
/// 2. Measure `second` on the same `input`.
/// 3. Record both elapsed times and the label.
/// 4. If the outputs compare equal, record the label as matched.
/// 5. Emit an [`Event`] to the observer.
///    If the observer returns `StopEarly`, terminate.
///
/// `first` is always called before `second` for a given item, so any state
/// shared between the two models is seen by `first` first.
///
/// The run also ends once [`Config::max_items`] items have been measured. To
/// tell a capped run from one whose source ran out at the cap, `data` is
/// advanced one item past the cap; that item is never measured.
///
/// # Errors
///
/// - [`Error::First`] or [`Error::Second`] if a model fails. The run stops at
///   the failing item and the measurements taken so far are discarded.
/// - [`Error::NoData`] if `data` yields no items.
pub fn run<A, B, L, D, Obs>(
    first: &Candidate<A>,
    second: &Candidate<B>,
    data: D,
    config: &Config,
    mut observer: Obs,
) -> Result<Comparison<L>, Error>
where
    A: Model,
    B: Model<Input = A::Input>,
    A::Output: PartialEq<B::Output>,
    L: Clone,
    D: IntoIterator<Item = (L, A::Input)>,
    Obs: Observer<Event<L, A::Output, B::Output>, Action>,
{
    info!(
        first = first.name(),
        second = second.name(),
        max_items = ?config.max_items(),
        "starting comparison"
    );

    let mut comparison = Comparison::new(first.name(), second.name());
    let limit = config.max_items().unwrap_or(usize::MAX);

    let mut items = data.into_iter().peekable();

    while let Some((label, input)) = items.next() {
        let index = comparison.len();
        let first_sample = measure(first.model(), &input).map_err(|err| {
            debug!(index, model = first.name(), error = %err, "model failed");
            Error::first(err)
        })?;
        let second_sample = measure(second.model(), &input).map_err(|err| {
            debug!(index, model = second.name(), error = %err, "model failed");
            Error::second(err)
        })?;

        let matched = first_sample.output == second_sample.output;
        let first_time = first_sample.seconds();
        let second_time = second_sample.seconds();

        debug!(index, first_time, second_time, matched, "measured item");
        comparison.push(label.clone(), first_time, second_time, matched);

        let event = Event {
            index,
            label,
            first: first_sample,
            second: second_sample,
            matched,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            comparison.set_status(Status::StoppedByObserver);
            break;
        }

        if comparison.len() == limit {
            if items.peek().is_some() {
                comparison.set_status(Status::ReachedItemLimit);
            }
            break;
        }
    }

    if comparison.is_empty() {
        return Err(Error::NoData);
    }

    info!(
        items = comparison.len(),
        matched = comparison.matched_count(),
        status = ?comparison.status(),
        "comparison finished"
    );

    Ok(comparison)
}

/// Times two models over every item of `data` without observation.
///
/// This is a convenience wrapper around [`run`] that discards events.
///
/// # Errors
///
/// Returns an error under the same conditions as [`run`].
pub fn run_unobserved<A, B, L, D>(
    first: &Candidate<A>,
    second: &Candidate<B>,
    data: D,
    config: &Config,
) -> Result<Comparison<L>, Error>
where
    A: Model,
    B: Model<Input = A::Input>,
    A::Output: PartialEq<B::Output>,
    L: Clone,
    D: IntoIterator<Item = (L, A::Input)>,
{
    run(first, second, data, config, ())
}

/// Times two models over `data` and draws the result onto `surface`.
///
/// The surface is returned so the caller can present it. Pass `&mut surface`
/// to keep ownership instead.
///
/// # Errors
///
/// Returns an error under the same conditions as [`run`], in which case the
/// surface is never drawn on, or [`Error::Surface`] if drawing fails.
pub fn timer<A, B, L, D, S>(
    first: &Candidate<A>,
    second: &Candidate<B>,
    data: D,
    config: &Config,
    surface: S,
) -> Result<S, Error>
where
    A: Model,
    B: Model<Input = A::Input>,
    A::Output: PartialEq<B::Output>,
    L: Clone,
    D: IntoIterator<Item = (L, A::Input)>,
    S: Surface<Comparison<L>>,
{
    let comparison = run_unobserved(first, second, data, config)?;
    comparison.draw(surface)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{cell::RefCell, convert::Infallible};

    use tandem_core::model_fn;

    // --- Test fixtures ---

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("failed on {0}")]
    struct Failed(i32);

    /// Returns its input unchanged.
    struct Identity;

    impl Model for Identity {
        type Input = i32;
        type Output = i32;
        type Error = Infallible;

        fn call(&self, input: &i32) -> Result<i32, Infallible> {
            Ok(*input)
        }
    }

    /// Returns its input plus one.
    struct PlusOne;

    impl Model for PlusOne {
        type Input = i32;
        type Output = i32;
        type Error = Infallible;

        fn call(&self, input: &i32) -> Result<i32, Infallible> {
            Ok(input + 1)
        }
    }

    /// Echoes its input, failing on one specific value.
    struct FailsOn(i32);

    impl Model for FailsOn {
        type Input = i32;
        type Output = i32;
        type Error = Failed;

        fn call(&self, input: &i32) -> Result<i32, Failed> {
            if *input == self.0 {
                Err(Failed(*input))
            } else {
                Ok(*input)
            }
        }
    }

    /// Surface that records every comparison it is given.
    #[derive(Default)]
    struct Recorder {
        drawn: Vec<Comparison<i32>>,
    }

    impl Surface<Comparison<i32>> for Recorder {
        type Error = Infallible;

        fn draw(&mut self, data: &Comparison<i32>) -> Result<(), Infallible> {
            self.drawn.push(data.clone());
            Ok(())
        }
    }

    fn items(labels: &[i32]) -> Vec<(i32, i32)> {
        labels.iter().map(|&x| (x, x)).collect()
    }

    // --- Tests ---

    #[test]
    fn equal_models_match_every_label() {
        let first = Candidate::new("identity_a", Identity);
        let second = Candidate::new("identity_b", Identity);

        let comparison =
            run_unobserved(&first, &second, items(&[1, 2, 3]), &Config::default()).unwrap();

        assert_eq!(comparison.matched_labels(), [1, 2, 3]);
        assert_eq!(comparison.first_times().len(), 3);
        assert_eq!(comparison.second_times().len(), 3);
        assert_eq!(comparison.status(), Status::Complete);
        assert!(comparison.all_matched());
    }

    #[test]
    fn differing_models_match_nothing_but_complete() {
        let first = Candidate::new("identity", Identity);
        let second = Candidate::new("plus_one", PlusOne);

        let comparison =
            run_unobserved(&first, &second, items(&[1, 2, 3]), &Config::default()).unwrap();

        assert!(comparison.matched_labels().is_empty());
        assert_eq!(comparison.first_times().len(), 3);
        assert_eq!(comparison.second_times().len(), 3);
        assert_eq!(comparison.labels(), [1, 2, 3]);
    }

    #[test]
    fn empty_data_is_an_explicit_error() {
        let first = Candidate::new("a", Identity);
        let second = Candidate::new("b", Identity);

        let err = run_unobserved(&first, &second, Vec::<(i32, i32)>::new(), &Config::default())
            .unwrap_err();

        assert!(matches!(err, Error::NoData));
        assert_eq!(err.to_string(), "no measurements collected");
    }

    #[test]
    fn second_model_failure_aborts_and_propagates() {
        let first = Candidate::new("identity", Identity);
        let second = Candidate::new("fails_on_2", FailsOn(2));

        let mut events = 0;
        let err = run(
            &first,
            &second,
            items(&[1, 2, 3]),
            &Config::default(),
            |_: &Event<i32, i32, i32>| {
                events += 1;
                None
            },
        )
        .unwrap_err();

        assert_eq!(events, 1);
        match err {
            Error::Second(source) => {
                assert_eq!(source.downcast_ref::<Failed>(), Some(&Failed(2)));
            }
            other => panic!("expected second model error, got {other:?}"),
        }
    }

    #[test]
    fn first_model_failure_is_reported_as_first() {
        let first = Candidate::new("fails_on_1", FailsOn(1));
        let second = Candidate::new("identity", Identity);

        let err = run_unobserved(&first, &second, items(&[1]), &Config::default()).unwrap_err();

        assert!(matches!(err, Error::First(_)));
    }

    #[test]
    fn rounding_differences_are_not_matched() {
        let first = Candidate::new(
            "sum",
            model_fn(|(a, b): &(f64, f64)| Ok::<_, Infallible>(a + b)),
        );
        let second = Candidate::new("literal", model_fn(|_: &(f64, f64)| Ok::<_, Infallible>(0.3)));

        let comparison =
            run_unobserved(&first, &second, [(1, (0.1, 0.2))], &Config::default()).unwrap();

        assert_eq!(comparison.labels(), [1]);
        assert!(comparison.matched_labels().is_empty());
    }

    #[test]
    fn labels_keep_yield_order_and_duplicates() {
        let first = Candidate::new("a", Identity);
        let second = Candidate::new("b", Identity);

        let comparison =
            run_unobserved(&first, &second, items(&[5, 1, 5, 3]), &Config::default()).unwrap();

        assert_eq!(comparison.labels(), [5, 1, 5, 3]);
        assert_eq!(comparison.matched_labels(), [5, 1, 5, 3]);
    }

    #[test]
    fn first_is_called_before_second_on_each_item() {
        let log = RefCell::new(Vec::new());
        let first = Candidate::new(
            "a",
            model_fn(|x: &i32| {
                log.borrow_mut().push(("a", *x));
                Ok::<_, Infallible>(*x)
            }),
        );
        let second = Candidate::new(
            "b",
            model_fn(|x: &i32| {
                log.borrow_mut().push(("b", *x));
                Ok::<_, Infallible>(*x)
            }),
        );

        run_unobserved(&first, &second, items(&[1, 2]), &Config::default()).unwrap();

        assert_eq!(*log.borrow(), [("a", 1), ("b", 1), ("a", 2), ("b", 2)]);
    }

    #[test]
    fn observer_can_stop_an_unbounded_source() {
        let first = Candidate::new("a", Identity);
        let second = Candidate::new("b", PlusOne);

        let observer = |event: &Event<i32, i32, i32>| {
            if event.index >= 4 {
                Some(Action::StopEarly)
            } else {
                None
            }
        };

        let comparison =
            run(&first, &second, (0..).map(|x| (x, x)), &Config::default(), observer).unwrap();

        assert_eq!(comparison.status(), Status::StoppedByObserver);
        assert_eq!(comparison.labels(), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn item_cap_bounds_an_unbounded_source() {
        let first = Candidate::new("a", Identity);
        let second = Candidate::new("b", Identity);
        let config = Config::new(Some(3)).unwrap();

        let comparison = run_unobserved(&first, &second, (10..).map(|x| (x, x)), &config).unwrap();

        assert_eq!(comparison.status(), Status::ReachedItemLimit);
        assert_eq!(comparison.labels(), [10, 11, 12]);
    }

    #[test]
    fn source_that_ends_at_the_cap_is_complete() {
        let first = Candidate::new("a", Identity);
        let second = Candidate::new("b", Identity);
        let config = Config::new(Some(2)).unwrap();

        let comparison = run_unobserved(&first, &second, [(1, 1), (2, 2)], &config).unwrap();

        assert_eq!(comparison.status(), Status::Complete);
        assert_eq!(comparison.labels(), [1, 2]);
    }

    #[test]
    fn item_past_the_cap_is_pulled_but_never_measured() {
        let calls = RefCell::new(Vec::new());
        let first = Candidate::new(
            "a",
            model_fn(|x: &i32| {
                calls.borrow_mut().push(*x);
                Ok::<_, Infallible>(*x)
            }),
        );
        let second = Candidate::new("b", Identity);
        let config = Config::new(Some(2)).unwrap();

        let comparison = run_unobserved(&first, &second, [(1, 1), (2, 2), (3, 3)], &config).unwrap();

        assert_eq!(comparison.status(), Status::ReachedItemLimit);
        assert_eq!(*calls.borrow(), [1, 2]);
    }

    #[test]
    fn events_carry_samples_and_match_flags() {
        let first = Candidate::new("a", Identity);
        let second = Candidate::new("b", FailsOn(i32::MIN));

        let mut seen = Vec::new();
        run(
            &first,
            &second,
            items(&[7, 8]),
            &Config::default(),
            |event: &Event<i32, i32, i32>| {
                seen.push((event.index, event.label, event.first.output, event.matched));
                None
            },
        )
        .unwrap();

        assert_eq!(seen, [(0, 7, 7, true), (1, 8, 8, true)]);
    }

    #[test]
    fn timer_draws_once_and_returns_the_surface() {
        let first = Candidate::new("identity", Identity);
        let second = Candidate::new("plus_one", PlusOne);

        let surface = timer(
            &first,
            &second,
            items(&[1, 2]),
            &Config::default(),
            Recorder::default(),
        )
        .unwrap();

        assert_eq!(surface.drawn.len(), 1);
        assert_eq!(surface.drawn[0].first_name(), "identity");
        assert_eq!(surface.drawn[0].second_name(), "plus_one");
        assert_eq!(surface.drawn[0].labels(), [1, 2]);
    }

    #[test]
    fn failed_run_never_reaches_the_surface() {
        let first = Candidate::new("identity", Identity);
        let second = Candidate::new("fails_on_2", FailsOn(2));
        let mut recorder = Recorder::default();

        let result = timer(
            &first,
            &second,
            items(&[1, 2, 3]),
            &Config::default(),
            &mut recorder,
        );

        assert!(matches!(result, Err(Error::Second(_))));
        assert!(recorder.drawn.is_empty());
    }

    #[test]
    fn empty_run_never_reaches_the_surface() {
        let first = Candidate::new("a", Identity);
        let second = Candidate::new("b", Identity);
        let mut recorder = Recorder::default();

        let result = timer(&first, &second, items(&[]), &Config::default(), &mut recorder);

        assert!(matches!(result, Err(Error::NoData)));
        assert!(recorder.drawn.is_empty());
    }
}
