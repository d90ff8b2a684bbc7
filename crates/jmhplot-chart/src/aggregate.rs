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

//! Group table records into per-variant series.

use jmhplot_core::{BenchError, Metric, Record, Result, COL_DIST};
use std::collections::BTreeMap;
use tracing::debug;

/// One plotted point: input size against the selected metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub n: i64,
    pub y: f64,
}

/// Points grouped by variant.
///
/// Variants iterate in lexicographic order; within a variant, points are
/// sorted by ascending `n` with ties kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    groups: BTreeMap<String, Vec<SeriesPoint>>,
}

impl Series {
    /// Group `(variant, point)` pairs, preserving their relative order for
    /// equal `n`.
    pub fn from_points<I, S>(points: I) -> Self
    where
        I: IntoIterator<Item = (S, SeriesPoint)>,
        S: Into<String>,
    {
        let mut groups: BTreeMap<String, Vec<SeriesPoint>> = BTreeMap::new();
        for (variant, point) in points {
            groups.entry(variant.into()).or_default().push(point);
        }
        for points in groups.values_mut() {
            points.sort_by_key(|p| p.n);
        }
        Self { groups }
    }

    /// Variant names in legend order.
    pub fn variants(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Points of one variant.
    pub fn points(&self, variant: &str) -> Option<&[SeriesPoint]> {
        self.groups.get(variant).map(Vec::as_slice)
    }

    /// `(variant, points)` pairs in legend order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SeriesPoint])> {
        self.groups
            .iter()
            .map(|(variant, points)| (variant.as_str(), points.as_slice()))
    }

    /// Number of variants.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of points across all variants.
    pub fn point_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// Filter records to one distribution and group the selected metric by
/// variant.
///
/// The distribution match is exact and case-sensitive; other records are
/// skipped without coercing their values. `Metric::Time` plots
/// microseconds per operation as stored, `Metric::Mem` bytes per operation.
///
/// # Errors
///
/// - `InvalidValue` if a matching record's `n` or metric values do not coerce
/// - `MissingField` if a record lacks a column
/// - `EmptyResult` if no record matches `dist`
///
/// # Examples
///
/// ```
/// use jmhplot_chart::aggregate;
/// use jmhplot_core::{Metric, Record, Row};
///
/// let records: Vec<Record> = [
///     Row::new("longSet", "GRID", 64, 4.0, 512.0),
///     Row::new("longSet", "GRID", 24, 1.0, 192.0),
///     Row::new("longSet", "RANDOM", 24, 9.0, 200.0),
/// ]
/// .iter()
/// .map(Record::from)
/// .collect();
///
/// let series = aggregate(&records, "GRID", Metric::Time).unwrap();
/// let points = series.points("longSet").unwrap();
/// assert_eq!(points.iter().map(|p| p.n).collect::<Vec<_>>(), vec![24, 64]);
/// assert_eq!(points[0].y, 1.0);
/// ```
pub fn aggregate(records: &[Record], dist: &str, metric: Metric) -> Result<Series> {
    let mut points = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let record_dist = record
            .require(COL_DIST)
            .map_err(|e| e.with_record(index))?;
        if record_dist != dist {
            continue;
        }

        let row = record.to_row(index)?;
        let y = metric.select(row.microseconds_per_op, row.bytes_allocated_per_op);
        points.push((row.variant, SeriesPoint { n: row.n, y }));
    }

    if points.is_empty() {
        return Err(BenchError::empty_result(format!(
            "no data found for dist={} with plot type={}",
            dist, metric
        )));
    }

    let series = Series::from_points(points);
    debug!(
        dist,
        metric = metric.as_str(),
        variants = series.len(),
        points = series.point_count(),
        "aggregated series"
    );
    Ok(series)
}
