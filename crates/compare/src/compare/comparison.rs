use tandem_core::Surface;

use super::Error;

/// Indicates how a comparison run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The data source was exhausted.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,

    /// Stopped at the configured maximum number of items with more left in
    /// the data source.
    ReachedItemLimit,
}

/// The measurements collected by one comparison run.
///
/// Times, labels, and match flags are stored in lockstep: entry `i` of
/// [`first_times`](Self::first_times), [`second_times`](Self::second_times),
/// and [`labels`](Self::labels) all describe the `i`-th input item.
/// [`matched_labels`](Self::matched_labels) is the subsequence of labels
/// whose outputs compared equal.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison<L> {
    first_name: String,
    second_name: String,
    first_times: Vec<f64>,
    second_times: Vec<f64>,
    labels: Vec<L>,
    matched_labels: Vec<L>,
    status: Status,
}

impl<L> Comparison<L> {
    pub(crate) fn new(first_name: &str, second_name: &str) -> Self {
        Self {
            first_name: first_name.to_owned(),
            second_name: second_name.to_owned(),
            first_times: Vec::new(),
            second_times: Vec::new(),
            labels: Vec::new(),
            matched_labels: Vec::new(),
            status: Status::Complete,
        }
    }

    /// Appends one measured item.
    pub(crate) fn push(&mut self, label: L, first_time: f64, second_time: f64, matched: bool)
    where
        L: Clone,
    {
        if matched {
            self.matched_labels.push(label.clone());
        }
        self.first_times.push(first_time);
        self.second_times.push(second_time);
        self.labels.push(label);
    }

    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Returns the display name of the first model.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the display name of the second model.
    #[must_use]
    pub fn second_name(&self) -> &str {
        &self.second_name
    }

    /// Elapsed seconds of the first model, one entry per item.
    #[must_use]
    pub fn first_times(&self) -> &[f64] {
        &self.first_times
    }

    /// Elapsed seconds of the second model, one entry per item.
    #[must_use]
    pub fn second_times(&self) -> &[f64] {
        &self.second_times
    }

    /// Item labels in yield order.
    #[must_use]
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Labels of the items where both outputs compared equal.
    #[must_use]
    pub fn matched_labels(&self) -> &[L] {
        &self.matched_labels
    }

    /// Returns how the run terminated.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Number of measured items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of items whose outputs compared equal.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched_labels.len()
    }

    /// Returns `true` if the outputs matched for every measured item.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.matched_labels.len() == self.labels.len()
    }

    /// The largest elapsed time of the second model, or `None` if empty.
    #[must_use]
    pub fn max_second_time(&self) -> Option<f64> {
        self.second_times.iter().copied().reduce(f64::max)
    }

    /// Hands this comparison to `surface` and returns the surface.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Surface`] if the surface fails to draw.
    pub fn draw<S>(&self, mut surface: S) -> Result<S, Error>
    where
        S: Surface<Self>,
    {
        surface.draw(self).map_err(Error::surface)?;
        Ok(surface)
    }
}
