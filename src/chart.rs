/*!
 * Draws the fragmentation series as a labeled line chart
 */

use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::error::{FragLogError, Result};
use crate::series_builder::Series;

pub const LEGEND_LABEL: &str = "Line";
pub const X_LABEL: &str = "x - Calls of simple_malloc or simple_free";
pub const Y_LABEL: &str = "y - Fragmentation";
pub const TITLE: &str = "Fragmentation of simple_malloc and simple_free in Bash";

/// Labels, size and destination of the chart.
///
/// `output: None` shows the chart in the interactive viewer instead of writing a file.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend: String,
    pub size: (u32, u32),
    pub output: Option<PathBuf>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            title: TITLE.to_owned(),
            x_label: X_LABEL.to_owned(),
            y_label: Y_LABEL.to_owned(),
            legend: LEGEND_LABEL.to_owned(),
            size: (640, 480),
            output: None,
        }
    }
}

/// Image format, picked from the output file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn from_path(path: &Path) -> ImageFormat {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => ImageFormat::Svg,
            _ => ImageFormat::Png,
        }
    }
}

pub(crate) fn chart_err<E: std::fmt::Display>(e: E) -> FragLogError {
    FragLogError::Chart(e.to_string())
}

/// Render `series` into the image file at `path`.
///
/// An empty series still produces a chart with empty axes.
pub fn render(series: &Series, config: &PlotConfig, path: &Path) -> Result<()> {
    match ImageFormat::from_path(path) {
        ImageFormat::Svg => {
            let root = SVGBackend::new(path, config.size).into_drawing_area();
            draw_chart(&root, series, config)?;
        }
        ImageFormat::Png => {
            let root = BitMapBackend::new(path, config.size).into_drawing_area();
            draw_chart(&root, series, config)?;
        }
    }
    info!(path = %path.display(), points = series.len(), "chart written");
    Ok(())
}

/// Draw the single line series with its legend, axis labels and title.
pub fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &Series,
    config: &PlotConfig,
) -> Result<()> {
    root.fill(&WHITE).map_err(chart_err)?;
    let (x_range, y_range) = series.bounds();
    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", 24).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, y_range)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(LineSeries::new(series.points(), &RED))
        .map_err(chart_err)?
        .label(&config.legend)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}
