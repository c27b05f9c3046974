use std::error::Error as StdError;

/// Errors that can occur during a comparison run.
///
/// Model errors are boxed without modification. Call `downcast_ref` on the
/// boxed error to recover the original value.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("first model error: {0}")]
    First(#[source] Box<dyn StdError + Send + Sync>),

    #[error("second model error: {0}")]
    Second(#[source] Box<dyn StdError + Send + Sync>),

    #[error("no measurements collected")]
    NoData,

    #[error("surface error: {0}")]
    Surface(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn first<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::First(Box::new(err))
    }

    pub(crate) fn second<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Second(Box::new(err))
    }

    pub(crate) fn surface<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Surface(Box::new(err))
    }
}
