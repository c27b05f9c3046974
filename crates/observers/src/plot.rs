//! Native window rendering of comparison figures.
//!
//! See [`PlotSurface::show`] and [`ShowConfig`] for usage.

use eframe::egui::{self, Color32};
use egui_plot::{GridInput, GridMark, Legend, Line, Plot, PlotPoints};
use thiserror::Error;

use crate::{
    PlotSurface,
    figure::{Figure, LIME_GREEN, MARKER_NAME, MARKER_OPACITY, Rgb},
};

/// Vertical space reserved for each figure's heading.
const HEADING_ALLOWANCE: f32 = 32.0;

const MIN_PLOT_HEIGHT: f32 = 120.0;

/// Configuration for rendering a [`PlotSurface`].
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// surface.show(ShowConfig::new().title("Sorting").without_legend())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: window named after the first
    /// figure, legend shown.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: true,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Hides the legend.
    #[must_use]
    pub fn without_legend(mut self) -> Self {
        self.legend = false;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when showing a [`PlotSurface`].
#[derive(Debug, Error)]
pub enum ShowError {
    #[error("nothing has been drawn on the surface")]
    Empty,

    #[error("window error: {0}")]
    Window(#[from] eframe::Error),
}

impl PlotSurface {
    /// Opens a blocking egui window displaying every figure on the surface.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if no figure has been drawn or if the native window
    /// cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), ShowError> {
        let figures = self.into_figures();
        let Some(first) = figures.first() else {
            return Err(ShowError::Empty);
        };

        let title = config.title.unwrap_or_else(|| first.title().to_owned());
        let app = PlotApp {
            figures,
            legend: config.legend,
        };

        eframe::run_native(
            &title,
            eframe::NativeOptions::default(),
            Box::new(move |_cc| Ok(Box::new(app))),
        )?;

        Ok(())
    }
}

/// The egui [`eframe::App`] that renders collected figures.
struct PlotApp {
    figures: Vec<Figure>,
    legend: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            #[allow(clippy::cast_precision_loss)]
            let height = ui.available_height() / self.figures.len() as f32;

            for (index, figure) in self.figures.iter().enumerate() {
                ui.heading(figure.title());
                draw_figure(ui, index, figure, self.legend, height);
            }
        });
    }
}

fn draw_figure(ui: &mut egui::Ui, index: usize, figure: &Figure, legend: bool, height: f32) {
    let ticks = figure.x_ticks().to_vec();
    let step_size = figure.x_tick_spacing();

    let mut plot = Plot::new(("comparison", index))
        .height((height - HEADING_ALLOWANCE).max(MIN_PLOT_HEIGHT))
        .x_axis_label(figure.x_label())
        .y_axis_label(figure.y_label())
        .x_grid_spacer(move |_input: GridInput| {
            ticks
                .iter()
                .map(|&value| GridMark { value, step_size })
                .collect()
        });
    if legend {
        plot = plot.legend(Legend::default());
    }

    plot.show(ui, |plot_ui| {
        for series in figure.series() {
            let points: PlotPoints = series.points.iter().copied().collect();
            plot_ui.line(Line::new(points).name(&series.name).color(color(series.color)));
        }

        let marker_color = color(LIME_GREEN).gamma_multiply(MARKER_OPACITY);
        for marker in figure.markers() {
            let points: PlotPoints = vec![[marker.x, marker.bottom], [marker.x, marker.top]].into();
            plot_ui.line(Line::new(points).name(MARKER_NAME).color(marker_color));
        }
    });
}

fn color([r, g, b]: Rgb) -> Color32 {
    Color32::from_rgb(r, g, b)
}
