//! An observer that bounds the time a comparison run spends measuring.
//!
//! Useful with an unbounded data source whose items grow more expensive as
//! the run proceeds.
//!
//! # Example
//!
//! ```rust
//! use std::{convert::Infallible, thread, time::Duration};
//!
//! use tandem_compare::compare::{self, Candidate, Config, Status};
//! use tandem_core::model_fn;
//! use tandem_observers::TimeBudget;
//!
//! let napping = |n: &u64| {
//!     thread::sleep(Duration::from_millis(1));
//!     Ok::<_, Infallible>(n * 2)
//! };
//! let first = Candidate::new("napping", model_fn(napping));
//! let second = Candidate::new("shift", model_fn(|n: &u64| Ok::<_, Infallible>(n << 1)));
//!
//! let comparison = compare::run(
//!     &first,
//!     &second,
//!     (1..).map(|n| (n, n)),
//!     &Config::default(),
//!     TimeBudget::new(Duration::from_millis(5)),
//! )
//! .unwrap();
//!
//! assert_eq!(comparison.status(), Status::StoppedByObserver);
//! assert!(comparison.all_matched());
//! ```

use std::time::Duration;

use tandem_compare::compare::{Action, Event};
use tandem_core::Observer;

/// Stops a run once the combined time of both models reaches a budget.
///
/// The item that crosses the budget is kept; the run stops after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBudget {
    budget: Duration,
    spent: Duration,
}

impl TimeBudget {
    #[must_use]
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            spent: Duration::ZERO,
        }
    }

    /// Time measured so far across both models.
    #[must_use]
    pub fn spent(&self) -> Duration {
        self.spent
    }

    /// Returns `true` once the budget has been used up.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.spent >= self.budget
    }
}

impl<L, O1, O2> Observer<Event<L, O1, O2>, Action> for TimeBudget {
    fn observe(&mut self, event: &Event<L, O1, O2>) -> Option<Action> {
        self.spent += event.first.elapsed + event.second.elapsed;
        self.is_exhausted().then_some(Action::StopEarly)
    }
}

/// Allows `&mut TimeBudget` to be passed to a run, so
/// [`TimeBudget::spent`] can be read after the run completes.
impl<L, O1, O2> Observer<Event<L, O1, O2>, Action> for &mut TimeBudget {
    fn observe(&mut self, event: &Event<L, O1, O2>) -> Option<Action> {
        (*self).observe(event)
    }
}
