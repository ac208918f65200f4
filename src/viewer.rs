/*!
 * Shows the fragmentation chart in an interactive gnuplot window
 */

use gnuplot::{AutoOption, AxesCommon, Caption, Figure};
use tracing::info;

use crate::chart::{chart_err, PlotConfig};
use crate::error::Result;
use crate::series_builder::Series;

/// Keeps gnuplot alive until the user closes the window.
const WAIT_FOR_CLOSE: &str = "pause mouse close";

/// Build the gnuplot figure for `series`: one line with the configured labels.
///
/// Axis ranges are fixed so an empty series still gets a (blank) chart.
pub fn build_figure(series: &Series, config: &PlotConfig) -> Figure {
    let (x_range, y_range) = series.bounds();
    let mut fg = Figure::new();
    fg.axes2d()
        .lines(
            series.xs().iter().copied(),
            series.ys().iter().copied(),
            &[Caption(config.legend.as_str())],
        )
        .set_x_range(AutoOption::Fix(x_range.start), AutoOption::Fix(x_range.end))
        .set_y_range(AutoOption::Fix(y_range.start), AutoOption::Fix(y_range.end))
        .set_x_label(&config.x_label, &[])
        .set_y_label(&config.y_label, &[])
        .set_title(&config.title, &[]);
    fg.set_post_commands(WAIT_FOR_CLOSE);
    fg
}

/// Display the chart and block until its window is closed.
pub fn show(series: &Series, config: &PlotConfig) -> Result<()> {
    let mut fg = build_figure(series, config);
    info!(points = series.len(), "showing chart, close the window to exit");
    // dropping the closer waits for gnuplot to exit
    let closer = fg.show().map_err(chart_err)?;
    drop(closer);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script_of(series: &Series) -> String {
        let mut out = Vec::new();
        build_figure(series, &PlotConfig::default()).echo(&mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_script_has_labels_and_waits() {
        let script = script_of(&Series::from_values(&[0.1, 0.2]));
        assert!(script.contains("Fragmentation of simple_malloc and simple_free in Bash"));
        assert!(script.contains("x - Calls of simple_malloc or simple_free"));
        assert!(script.contains("y - Fragmentation"));
        assert!(script.contains("Line"));
        assert!(script.contains(WAIT_FOR_CLOSE));
    }

    #[test]
    fn test_empty_series_still_plots() {
        let script = script_of(&Series::from_values(&[]));
        assert!(script.contains("plot"));
        assert!(script.contains(WAIT_FOR_CLOSE));
    }
}
