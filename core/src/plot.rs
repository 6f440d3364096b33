//! Bland-Altman plot rendering
//!
//! Scatter of per-sample means against per-sample differences, with dashed
//! horizontal reference lines at the bias and both limits of agreement.
//! Axis ranges are fixed so plots for different views stay comparable.

use crate::agreement::AgreementStats;
use crate::error::{EchocatError, Result};
use plotters::prelude::*;
use std::path::Path;

/// Fixed x-axis range (mean EF, percent)
pub const X_RANGE: (f64, f64) = (10.0, 80.0);

/// Fixed y-axis range (EF difference, percent)
pub const Y_RANGE: (f64, f64) = (-40.0, 40.0);

const X_LABEL: &str = "Mean(Predicted EF(%),Reference EF(%))";
const Y_LABEL: &str = "Predicted EF(%) - Reference EF(%)";

const PLOT_SIZE: (u32, u32) = (1024, 768);
const LINE_COLOR: RGBColor = RGBColor(128, 128, 128);

fn plot_err<E: std::fmt::Display>(e: E) -> EchocatError {
    EchocatError::Plot(e.to_string())
}

/// Renders the Bland-Altman plot for one set of agreement statistics
///
/// The caption combines the view title with the rounded bias and limits,
/// mirroring the textual summary. Output is a PNG at `path`.
pub fn render_plot(path: &Path, title: &str, stats: &AgreementStats) -> Result<()> {
    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let caption = format!("{}: {}", title, stats.summary_line());

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, ("sans-serif", 24))
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(X_RANGE.0..X_RANGE.1, Y_RANGE.0..Y_RANGE.1)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(
            stats
                .means
                .iter()
                .zip(&stats.diffs)
                .map(|(&mean, &diff)| Circle::new((mean, diff), 4, BLUE.filled())),
        )
        .map_err(plot_err)?;

    for level in [stats.bias, stats.upper_limit, stats.lower_limit] {
        chart
            .draw_series(DashedLineSeries::new(
                [(X_RANGE.0, level), (X_RANGE.1, level)],
                8,
                4,
                LINE_COLOR.filled(),
            ))
            .map_err(plot_err)?;
    }

    root.present().map_err(plot_err)?;
    Ok(())
}
