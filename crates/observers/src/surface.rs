use tandem_compare::compare::Comparison;
use tandem_core::Surface;

use crate::figure::{Figure, FigureError, Label};

/// A plotting surface that lays out every comparison drawn on it.
///
/// Each call to [`draw`](Surface::draw) appends one [`Figure`]. With the
/// `plot` feature enabled, [`show`](PlotSurface::show) opens a window that
/// renders them.
///
/// # Example
///
/// ```ignore
/// let surface = compare::timer(&first, &second, data, &Config::default(), PlotSurface::new())?;
/// surface.show(ShowConfig::new().title("Sorting"))?;
/// ```
#[derive(Debug, Default, Clone)]
pub struct PlotSurface {
    figures: Vec<Figure>,
}

impl PlotSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Figures drawn so far, oldest first.
    #[must_use]
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    #[must_use]
    pub fn into_figures(self) -> Vec<Figure> {
        self.figures
    }
}

impl<L: Label> Surface<Comparison<L>> for PlotSurface {
    type Error = FigureError;

    fn draw(&mut self, data: &Comparison<L>) -> Result<(), FigureError> {
        self.figures.push(Figure::new(data)?);
        Ok(())
    }
}
