// Dweve JMHPlot - JMH benchmark tables and charts
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Data-derived chart layout, computed before any drawing happens.

use crate::aggregate::{Series, SeriesPoint};
use jmhplot_core::{BenchError, Metric, Result};

/// Horizontal axis label.
pub const X_LABEL: &str = "n (number of points)";
/// Legend heading.
pub const LEGEND_TITLE: &str = "variant";
/// Number of distinct line colours before the palette wraps.
pub const PALETTE_SIZE: usize = 12;

/// Output image size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1800,
            height: 1080,
        }
    }
}

/// One legend line: a variant and the palette slot its line is drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub variant: String,
    pub colour: usize,
    /// Points with a positive `n` and value, in drawing order.
    pub points: Vec<(f64, f64)>,
}

/// Everything the renderer needs, as plain values.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend_title: String,
    /// Power-of-two bounds enclosing every drawn `n`.
    pub x_range: (f64, f64),
    /// Power-of-two bounds enclosing every drawn value.
    pub y_range: (f64, f64),
    pub entries: Vec<LegendEntry>,
    /// Points left out because a log axis cannot place them.
    pub dropped: usize,
    pub width: u32,
    pub height: u32,
}

impl ChartLayout {
    /// Compute the layout of `series` for one distribution and metric.
    ///
    /// Fails with `EmptyResult` when no point has a positive `n` and value,
    /// since nothing could be drawn on log-scaled axes.
    pub fn new(series: &Series, dist: &str, metric: Metric, config: &ChartConfig) -> Result<Self> {
        let mut dropped = 0;
        let mut entries = Vec::with_capacity(series.len());

        for (slot, (variant, points)) in series.iter().enumerate() {
            let drawable: Vec<(f64, f64)> = points
                .iter()
                .filter(|p| is_drawable(p))
                .map(|p| (p.n as f64, p.y))
                .collect();
            dropped += points.len() - drawable.len();
            entries.push(LegendEntry {
                variant: variant.to_string(),
                colour: slot % PALETTE_SIZE,
                points: drawable,
            });
        }

        let xs = entries.iter().flat_map(|e| e.points.iter().map(|p| p.0));
        let ys = entries.iter().flat_map(|e| e.points.iter().map(|p| p.1));
        let (x_range, y_range) = match (power_of_two_bounds(xs), power_of_two_bounds(ys)) {
            (Some(x), Some(y)) => (x, y),
            _ => {
                return Err(BenchError::empty_result(format!(
                    "no positive values to plot for dist={} with plot type={}",
                    dist, metric
                )))
            }
        };

        Ok(Self {
            title: title(dist, metric),
            x_label: X_LABEL.to_string(),
            y_label: y_label(metric).to_string(),
            legend_title: LEGEND_TITLE.to_string(),
            x_range,
            y_range,
            entries,
            dropped,
            width: config.width,
            height: config.height,
        })
    }
}

fn is_drawable(point: &SeriesPoint) -> bool {
    point.n > 0 && point.y > 0.0 && point.y.is_finite()
}

/// Chart title for a metric and distribution.
pub fn title(dist: &str, metric: Metric) -> String {
    let heading = match metric {
        Metric::Time => "TIME TAKEN PER OPERATION",
        Metric::Mem => "ALLOCATIONS PER OPERATION",
    };
    format!("{} | DATA DISTRIBUTION={}", heading, dist)
}

/// Vertical axis label for a metric.
pub fn y_label(metric: Metric) -> &'static str {
    match metric {
        Metric::Time => "time per op (μsec/op)",
        Metric::Mem => "allocations per operation (bytes/op)",
    }
}

/// Smallest `[2^a, 2^b]` with `a < b` covering all values, or `None` if
/// there are none.
fn power_of_two_bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let (min, max) = values.fold(None, |acc: Option<(f64, f64)>, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })?;

    let lo = min.log2().floor();
    let mut hi = max.log2().ceil();
    if hi <= lo {
        hi = lo + 1.0;
    }
    Some((lo.exp2(), hi.exp2()))
}

/// Tick text for a log2 axis: whole numbers without a fraction, the rest
/// in shortest form.
pub fn format_tick(value: f64) -> String {
    if value >= 1.0 && value.fract() == 0.0 && value < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(points: &[(&str, i64, f64)]) -> Series {
        Series::from_points(
            points
                .iter()
                .map(|&(v, n, y)| (v.to_string(), SeriesPoint { n, y })),
        )
    }

    #[test]
    fn test_titles_and_labels() {
        let s = series(&[("a", 24, 1.0)]);
        let time = ChartLayout::new(&s, "GRID", Metric::Time, &ChartConfig::default()).unwrap();
        assert_eq!(time.title, "TIME TAKEN PER OPERATION | DATA DISTRIBUTION=GRID");
        assert_eq!(time.y_label, "time per op (μsec/op)");
        assert_eq!(time.x_label, "n (number of points)");
        assert_eq!(time.legend_title, "variant");

        let mem = ChartLayout::new(&s, "RANDOM", Metric::Mem, &ChartConfig::default()).unwrap();
        assert_eq!(mem.title, "ALLOCATIONS PER OPERATION | DATA DISTRIBUTION=RANDOM");
        assert_eq!(mem.y_label, "allocations per operation (bytes/op)");
    }

    #[test]
    fn test_ranges_snap_to_powers_of_two() {
        let s = series(&[("a", 24, 0.3), ("a", 100, 5000.0), ("b", 64, 2.0)]);
        let layout = ChartLayout::new(&s, "GRID", Metric::Time, &ChartConfig::default()).unwrap();
        assert_eq!(layout.x_range, (16.0, 128.0));
        assert_eq!(layout.y_range, (0.25, 8192.0));
    }

    #[test]
    fn test_single_value_range_is_widened() {
        let s = series(&[("a", 64, 4.0)]);
        let layout = ChartLayout::new(&s, "GRID", Metric::Time, &ChartConfig::default()).unwrap();
        assert_eq!(layout.x_range, (64.0, 128.0));
        assert_eq!(layout.y_range, (4.0, 8.0));
    }

    #[test]
    fn test_legend_order_and_palette() {
        let s = series(&[("pointSet", 1, 1.0), ("longSet", 1, 1.0)]);
        let layout = ChartLayout::new(&s, "GRID", Metric::Time, &ChartConfig::default()).unwrap();
        let names: Vec<&str> = layout.entries.iter().map(|e| e.variant.as_str()).collect();
        assert_eq!(names, vec!["longSet", "pointSet"]);
        assert_eq!(layout.entries[0].colour, 0);
        assert_eq!(layout.entries[1].colour, 1);
    }

    #[test]
    fn test_palette_wraps() {
        let names: Vec<String> = (0..PALETTE_SIZE + 2).map(|i| format!("v{:02}", i)).collect();
        let s = Series::from_points(
            names
                .iter()
                .map(|v| (v.clone(), SeriesPoint { n: 2, y: 2.0 })),
        );
        let layout = ChartLayout::new(&s, "GRID", Metric::Time, &ChartConfig::default()).unwrap();
        assert_eq!(layout.entries[PALETTE_SIZE].colour, 0);
        assert_eq!(layout.entries[PALETTE_SIZE + 1].colour, 1);
    }

    #[test]
    fn test_non_positive_points_are_dropped() {
        let s = series(&[("a", 24, 0.0), ("a", 32, 2.0), ("b", 0, 5.0), ("b", 8, -1.0)]);
        let layout = ChartLayout::new(&s, "GRID", Metric::Mem, &ChartConfig::default()).unwrap();
        assert_eq!(layout.dropped, 3);
        assert_eq!(layout.entries[0].points, vec![(32.0, 2.0)]);
        assert!(layout.entries[1].points.is_empty());
        assert_eq!(layout.x_range, (32.0, 64.0));
    }

    #[test]
    fn test_nothing_drawable_is_empty_result() {
        let s = series(&[("a", 24, 0.0)]);
        let err = ChartLayout::new(&s, "GRID", Metric::Mem, &ChartConfig::default()).unwrap_err();
        assert_eq!(err.kind, jmhplot_core::BenchErrorKind::EmptyResult);
    }

    #[test]
    fn test_config_size_is_carried() {
        let s = series(&[("a", 24, 1.0)]);
        let config = ChartConfig {
            width: 640,
            height: 480,
        };
        let layout = ChartLayout::new(&s, "GRID", Metric::Time, &config).unwrap();
        assert_eq!((layout.width, layout.height), (640, 480));
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(1024.0), "1024");
        assert_eq!(format_tick(0.5), "0.5");
        assert_eq!(format_tick(0.125), "0.125");
    }
}
