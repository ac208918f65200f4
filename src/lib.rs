pub mod chart;
pub mod error;
pub mod fraglog_reader;
pub mod fraglog_writer;
pub mod series_builder;
pub mod viewer;

use std::path::PathBuf;

use tracing::info;

pub use chart::PlotConfig;
pub use error::{FragLogError, Result};
pub use series_builder::Series;

/// Where the plotted values come from
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// Scan an allocator log for marked lines
    Log(PathBuf),
    /// Fixed demo data, no file involved
    Sample,
}

/// Build the series to plot from `source`.
pub fn load_series(source: &DataSource) -> Result<Series> {
    match source {
        DataSource::Log(path) => Ok(Series::from_values(&fraglog_reader::scan_file(path)?)),
        DataSource::Sample => Ok(Series::sample()),
    }
}

/// Load, summarize and chart in one pass.
///
/// Without `config.output` the chart is shown and this blocks until its window is closed.
pub fn plot(source: &DataSource, config: &PlotConfig) -> Result<()> {
    let series = load_series(source)?;
    match series.summary() {
        Some(s) => {
            info!(count = s.count, min = s.min, max = s.max, mean = s.mean, "fragmentation summary")
        }
        None => info!("no fragmentation lines found, chart will be empty"),
    }
    match &config.output {
        Some(path) => chart::render(&series, config, path),
        None => viewer::show(&series, config),
    }
}
