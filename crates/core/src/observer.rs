/// Hook called once per measured item of a comparison run.
///
/// `E` is the per-item event and `A` the control type the run understands.
/// Returning `Some(action)` asks the run to act on it, for example to stop
/// before the next item is drawn; `None` leaves the run alone.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer. `()` is the observer
/// of a run nobody is watching.
pub trait Observer<E, A> {
    /// Sees one item's event after it has been recorded.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
