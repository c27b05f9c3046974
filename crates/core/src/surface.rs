/// A destination for finished results, typically a plot.
///
/// A surface is an explicit value handed to whoever produces the data, so
/// independent runs never draw onto shared global state. The data type is a
/// trait parameter, which lets one surface accept several kinds of results.
pub trait Surface<D: ?Sized> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Draws `data` onto the surface.
    ///
    /// # Errors
    ///
    /// Each surface defines its own `Error` type for rendering failures.
    fn draw(&mut self, data: &D) -> Result<(), Self::Error>;
}

/// Allows `&mut S` to be passed where a surface is taken by value, so the
/// caller keeps ownership of the surface.
impl<D: ?Sized, S: Surface<D> + ?Sized> Surface<D> for &mut S {
    type Error = S::Error;

    fn draw(&mut self, data: &D) -> Result<(), Self::Error> {
        (**self).draw(data)
    }
}

/// A surface that discards everything it is given.
impl<D: ?Sized> Surface<D> for () {
    type Error = std::convert::Infallible;

    fn draw(&mut self, _data: &D) -> Result<(), Self::Error> {
        Ok(())
    }
}
