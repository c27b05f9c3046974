/// Control actions supported by a comparison run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run and keep the measurements taken so far.
    StopEarly,
}
