use std::{fmt, marker::PhantomData};

/// A callable model that maps a typed input to a typed output.
///
/// The input is passed by reference so the same value can be handed to
/// several models in turn. A model that takes several positional arguments
/// uses a tuple as its `Input`.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type to represent domain-specific failures.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A [`Model`] backed by a function or closure.
///
/// Construct with [`model_fn`].
pub struct FnModel<F, I, O, E> {
    function: F,
    _marker: PhantomData<fn(&I) -> Result<O, E>>,
}

/// Wraps a function or closure as a [`Model`].
///
/// # Example
///
/// ```rust
/// use std::convert::Infallible;
/// use tandem_core::{Model, model_fn};
///
/// let double = model_fn(|x: &i32| Ok::<_, Infallible>(x * 2));
/// assert_eq!(double.call(&21).unwrap(), 42);
/// ```
pub const fn model_fn<F, I, O, E>(function: F) -> FnModel<F, I, O, E>
where
    F: Fn(&I) -> Result<O, E>,
{
    FnModel {
        function,
        _marker: PhantomData,
    }
}

impl<F, I, O, E> Model for FnModel<F, I, O, E>
where
    F: Fn(&I) -> Result<O, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Input = I;
    type Output = O;
    type Error = E;

    fn call(&self, input: &I) -> Result<O, E> {
        (self.function)(input)
    }
}

impl<F, I, O, E> fmt::Debug for FnModel<F, I, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnModel").finish_non_exhaustive()
    }
}
