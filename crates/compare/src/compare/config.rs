use thiserror::Error;

/// Configuration for a comparison run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    max_items: Option<usize>,
}

/// Errors that can occur when validating a comparison config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_items must be positive")]
    ZeroItems,
}

impl Config {
    /// Creates a new config.
    ///
    /// `max_items` caps how many input items are drawn from the data source.
    /// `None` leaves the run unbounded, in which case an infinite source only
    /// ends through an observer.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_items` is `Some(0)`.
    pub fn new(max_items: Option<usize>) -> Result<Self, ConfigError> {
        if max_items == Some(0) {
            return Err(ConfigError::ZeroItems);
        }

        Ok(Self { max_items })
    }

    /// Returns the item cap, if any.
    #[must_use]
    pub fn max_items(&self) -> Option<usize> {
        self.max_items
    }
}
