use crate::Timed;

/// Event emitted after both models have been measured on one input item.
#[derive(Debug, Clone)]
pub struct Event<L, O1, O2> {
    /// Position of the item in yield order, starting at 0.
    pub index: usize,

    /// The item's label.
    pub label: L,

    /// Timing and output of the first model.
    pub first: Timed<O1>,

    /// Timing and output of the second model.
    pub second: Timed<O2>,

    /// Whether the two outputs compared equal.
    pub matched: bool,
}
