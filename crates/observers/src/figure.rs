//! Layout of a comparison plot.
//!
//! A [`Figure`] is everything needed to render one [`Comparison`]: a line
//! series per model, a vertical marker at every matched label, axis titles,
//! a title, and x-axis tick positions. It carries no rendering state, so it
//! can be built and inspected without opening a window.

use tandem_compare::compare::Comparison;
use thiserror::Error;

/// Distance between x-axis ticks, in label units.
///
/// Wide label ranges use a whole multiple of this so that no more than
/// [`MAX_TICKS`] ticks are laid out.
pub const TICK_SPACING: f64 = 200.0;

/// Upper bound on the number of x-axis ticks in a figure.
pub const MAX_TICKS: usize = 1_000;

/// Title of the x-axis.
pub const X_AXIS_TITLE: &str = "Complexity of data";

/// Title of the y-axis.
pub const Y_AXIS_TITLE: &str = "Time of execution [s]";

/// Legend entry shared by all match markers.
pub const MARKER_NAME: &str = "Similar result for both functions";

/// Opacity of the match markers.
pub const MARKER_OPACITY: f32 = 0.3;

/// An sRGB color.
pub type Rgb = [u8; 3];

pub const RED: Rgb = [255, 0, 0];
pub const BLUE: Rgb = [0, 0, 255];
pub const LIME_GREEN: Rgb = [50, 205, 50];

/// Errors that can occur when laying out a figure.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FigureError {
    #[error("no measurements to plot")]
    Empty,

    #[error("labels must be finite to be placed on the x-axis")]
    NonFiniteLabel,
}

/// A value that can be placed on the x-axis.
///
/// Implemented for every primitive numeric type. Integers wider than 52 bits
/// lose precision on conversion.
pub trait Label: Copy {
    fn position(self) -> f64;
}

macro_rules! impl_label {
    ($($ty:ty),*) => {
        $(
            impl Label for $ty {
                #[allow(clippy::cast_lossless, clippy::cast_precision_loss)]
                fn position(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_label!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

/// A named line of `[x, y]` points.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: Rgb,
    pub points: Vec<[f64; 2]>,
}

/// A vertical line marking a matched label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub x: f64,
    pub bottom: f64,
    pub top: f64,
}

/// The laid-out plot of one comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    title: String,
    series: [Series; 2],
    markers: Vec<Marker>,
    x_ticks: Vec<f64>,
    x_tick_spacing: f64,
}

impl Figure {
    /// Lays out `comparison`.
    ///
    /// The first model is drawn in red and the second in blue. Every matched
    /// label gets a marker spanning from zero to the slowest time of the
    /// second model. Ticks start at the smallest label and advance by
    /// [`tick_spacing`] while below the largest label.
    ///
    /// # Errors
    ///
    /// Returns [`FigureError::Empty`] if the comparison holds no items, or
    /// [`FigureError::NonFiniteLabel`] if a label converts to NaN or infinity.
    pub fn new<L: Label>(comparison: &Comparison<L>) -> Result<Self, FigureError> {
        let top = comparison.max_second_time().ok_or(FigureError::Empty)?;

        let xs: Vec<f64> = comparison.labels().iter().map(|&l| l.position()).collect();
        if !xs.iter().all(|x| x.is_finite()) {
            return Err(FigureError::NonFiniteLabel);
        }

        let line = |name: &str, color: Rgb, times: &[f64]| Series {
            name: name.to_owned(),
            color,
            points: xs.iter().zip(times).map(|(&x, &t)| [x, t]).collect(),
        };
        let series = [
            line(comparison.first_name(), RED, comparison.first_times()),
            line(comparison.second_name(), BLUE, comparison.second_times()),
        ];

        let markers = comparison
            .matched_labels()
            .iter()
            .map(|&l| Marker {
                x: l.position(),
                bottom: 0.0,
                top,
            })
            .collect();

        let min = xs.iter().copied().fold(f64::INFINITY, f64::min);
        let max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let spacing = tick_spacing(min, max);

        Ok(Self {
            title: format!("{} vs {}", comparison.first_name(), comparison.second_name()),
            series,
            markers,
            x_ticks: tick_positions(min, max, spacing),
            x_tick_spacing: spacing,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn x_label(&self) -> &'static str {
        X_AXIS_TITLE
    }

    #[must_use]
    pub fn y_label(&self) -> &'static str {
        Y_AXIS_TITLE
    }

    /// The two timing series, first model then second.
    #[must_use]
    pub fn series(&self) -> &[Series; 2] {
        &self.series
    }

    /// One marker per matched label, in run order.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    #[must_use]
    pub fn x_ticks(&self) -> &[f64] {
        &self.x_ticks
    }

    /// Distance between consecutive [`x_ticks`](Self::x_ticks).
    #[must_use]
    pub fn x_tick_spacing(&self) -> f64 {
        self.x_tick_spacing
    }
}

/// Returns the tick spacing for labels spanning `start..stop`.
///
/// This is [`TICK_SPACING`] unless the span would need more than
/// [`MAX_TICKS`] ticks, in which case it is the smallest multiple of
/// [`TICK_SPACING`] that fits.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn tick_spacing(start: f64, stop: f64) -> f64 {
    let span = stop - start;
    if !span.is_finite() || span <= 0.0 {
        return TICK_SPACING;
    }

    let widen = (span / (TICK_SPACING * MAX_TICKS as f64)).ceil().max(1.0);
    TICK_SPACING * widen
}

/// Returns `start, start + step, …` for every value strictly below `stop`,
/// keeping at most [`MAX_TICKS`] of them.
///
/// Returns an empty vector when `stop <= start`, `step` is not positive, or
/// the span is not finite.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn tick_positions(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if step.is_nan() || step <= 0.0 || stop <= start || !(stop - start).is_finite() {
        return Vec::new();
    }

    let count = ((stop - start) / step).ceil().min(MAX_TICKS as f64) as usize;
    (0..count).map(|i| start + i as f64 * step).collect()
}
