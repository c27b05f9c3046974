use tandem_core::Model;

/// A model paired with the display name used for its plot series.
#[derive(Debug, Clone)]
pub struct Candidate<M> {
    name: String,
    model: M,
}

impl<M: Model> Candidate<M> {
    /// Creates a candidate from a display name and a model.
    pub fn new(name: impl Into<String>, model: M) -> Self {
        Self {
            name: name.into(),
            model,
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the wrapped model.
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }
}
