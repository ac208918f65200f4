/*!
 * Builds the (x, y) series drawn on the fragmentation chart
 */

use std::ops::Range;

/// Points of a single line series
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

/// Indices used as the x coordinate of a value sequence of length `len`.
pub fn index_sequence(len: usize) -> Range<usize> {
    0..len
}

impl Series {
    /// One point per value, x being the value's position in the sequence.
    pub fn from_values(values: &[f64]) -> Series {
        let mut series = Series::default();
        for (i, value) in index_sequence(values.len()).zip(values) {
            series.add_point(i as f64, *value);
        }
        series
    }

    /// Fixed demo data, x = [1, 2, 3] and y = [2, 4, 1].
    pub fn sample() -> Series {
        let mut series = Series::default();
        for (x, y) in [(1.0, 2.0), (2.0, 4.0), (3.0, 1.0)] {
            series.add_point(x, y);
        }
        series
    }

    /// Append a point to the series
    pub fn add_point(&mut self, x: f64, y: f64) {
        self.xs.push(x);
        self.ys.push(y);
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn len(&self) -> usize {
        self.ys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ys.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Count, extremes and mean of the y values. `None` for an empty series.
    pub fn summary(&self) -> Option<SeriesSummary> {
        if self.ys.is_empty() {
            return None;
        }
        let min = self.ys.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = self.ys.iter().sum::<f64>() / self.ys.len() as f64;
        Some(SeriesSummary {
            count: self.ys.len(),
            min,
            max,
            mean,
        })
    }

    /// Axis ranges enclosing every point.
    ///
    /// Empty data gets `0..1`. Flat data is widened by one unit, or half its magnitude if
    /// larger. Values are clamped to `±f64::MAX / 4` so the width of a range stays finite.
    pub fn bounds(&self) -> (Range<f64>, Range<f64>) {
        (padded_range(&self.xs), padded_range(&self.ys))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

const AXIS_LIMIT: f64 = f64::MAX / 4.0;

fn padded_range(values: &[f64]) -> Range<f64> {
    let finite = values.iter().copied().filter(|v| v.is_finite());
    let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if min > max {
        return 0.0..1.0;
    }
    let (min, max) = (min.clamp(-AXIS_LIMIT, AXIS_LIMIT), max.clamp(-AXIS_LIMIT, AXIS_LIMIT));
    if min == max {
        let pad = (min.abs() * 0.5).max(1.0);
        return (min - pad)..(max + pad);
    }
    min..max
}
