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

//! The flat benchmark row and its untyped table form.

use crate::coerce::{coerce_float, coerce_int};
use crate::error::{BenchError, Result};
use std::collections::BTreeMap;
use std::fmt;

/// Column holding the variant name.
pub const COL_VARIANT: &str = "variant";
/// Column holding the distribution tag.
pub const COL_DIST: &str = "dist";
/// Column holding the input size.
pub const COL_N: &str = "n";
/// Column holding the primary timing metric.
pub const COL_MICROS_PER_OP: &str = "microseconds_per_op";
/// Column holding the allocation metric.
pub const COL_BYTES_PER_OP: &str = "bytes_allocated_per_op";

/// The fixed table header, in column order.
pub const COLUMNS: [&str; 5] = [
    COL_VARIANT,
    COL_DIST,
    COL_N,
    COL_MICROS_PER_OP,
    COL_BYTES_PER_OP,
];

/// One benchmark measurement, fully typed.
///
/// Rows are only ever built complete; there is no partially populated row.
///
/// # Examples
///
/// ```
/// use jmhplot_core::Row;
///
/// let row = Row::new("longSet", "RANDOM", 24, 1.0, 8264.0);
/// assert_eq!(row.to_fields(), ["longSet", "RANDOM", "24", "1.0", "8264.0"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Last dot-delimited segment of the benchmark identifier.
    pub variant: String,
    /// Distribution tag, verbatim from the benchmark parameters.
    pub dist: String,
    /// Input size parameter.
    pub n: i64,
    /// Primary metric, microseconds per operation.
    pub microseconds_per_op: f64,
    /// Secondary metric, bytes allocated per operation.
    pub bytes_allocated_per_op: f64,
}

impl Row {
    /// Create a new row.
    pub fn new(
        variant: impl Into<String>,
        dist: impl Into<String>,
        n: i64,
        microseconds_per_op: f64,
        bytes_allocated_per_op: f64,
    ) -> Self {
        Self {
            variant: variant.into(),
            dist: dist.into(),
            n,
            microseconds_per_op,
            bytes_allocated_per_op,
        }
    }

    /// Render the row as table fields, in [`COLUMNS`] order.
    pub fn to_fields(&self) -> [String; 5] {
        [
            self.variant.clone(),
            self.dist.clone(),
            self.n.to_string(),
            format_float(self.microseconds_per_op),
            format_float(self.bytes_allocated_per_op),
        ]
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Row(variant={}, dist={}, n={}, us_per_op={}, bytes_per_op={})",
            self.variant,
            self.dist,
            self.n,
            format_float(self.microseconds_per_op),
            format_float(self.bytes_allocated_per_op)
        )
    }
}

/// Format a float for the table.
///
/// Uses the shortest representation that parses back to the same value and
/// keeps a trailing `.0` on integral values (`8264.0`, not `8264`).
pub fn format_float(value: f64) -> String {
    format!("{:?}", value)
}

/// One data line of a table: column name to unparsed value.
///
/// Values are kept exactly as read; coercion happens in the consumer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    values: BTreeMap<String, String>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column value, replacing any previous one.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.values.insert(column.into(), value.into());
    }

    /// Get a column value.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// Get a column value that must be present.
    pub fn require(&self, column: &str) -> Result<&str> {
        self.get(column)
            .ok_or_else(|| BenchError::missing_field(column))
    }

    /// Number of columns in the record.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the record has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(column, value)` pairs in column-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Re-coerce the record into a typed [`Row`].
    ///
    /// `index` is the 0-based position of the record in its table and is
    /// attached to any error.
    pub fn to_row(&self, index: usize) -> Result<Row> {
        let locate = |e: BenchError| e.with_record(index);

        let variant = self.require(COL_VARIANT).map_err(locate)?;
        let dist = self.require(COL_DIST).map_err(locate)?;
        let n = coerce_int(self.require(COL_N).map_err(locate)?)
            .map_err(|e| e.with_field(COL_N).with_record(index))?;
        let us = coerce_float(self.require(COL_MICROS_PER_OP).map_err(locate)?)
            .map_err(|e| e.with_field(COL_MICROS_PER_OP).with_record(index))?;
        let bytes = coerce_float(self.require(COL_BYTES_PER_OP).map_err(locate)?)
            .map_err(|e| e.with_field(COL_BYTES_PER_OP).with_record(index))?;

        Ok(Row::new(variant, dist, n, us, bytes))
    }
}

impl From<&Row> for Record {
    fn from(row: &Row) -> Self {
        let mut record = Record::new();
        for (column, value) in COLUMNS.iter().zip(row.to_fields()) {
            record.insert(*column, value);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BenchErrorKind;

    fn sample_record() -> Record {
        Record::from(&Row::new("pointSet", "GRID", 1024, 12.5, 65536.0))
    }

    #[test]
    fn test_to_fields_keeps_float_suffix() {
        let row = Row::new("longSet", "RANDOM", 24, 1.0, 8264.0);
        assert_eq!(row.to_fields().join(","), "longSet,RANDOM,24,1.0,8264.0");
    }

    #[test]
    fn test_format_float_shortest_round_trip() {
        assert_eq!(format_float(0.1), "0.1");
        assert_eq!(format_float(123.456), "123.456");
        assert_eq!(format_float(f64::NAN), "NaN");
        let tiny = 1.234e-9;
        assert_eq!(format_float(tiny).parse::<f64>().unwrap(), tiny);
    }

    #[test]
    fn test_record_to_row() {
        let row = sample_record().to_row(0).unwrap();
        assert_eq!(row, Row::new("pointSet", "GRID", 1024, 12.5, 65536.0));
    }

    #[test]
    fn test_record_to_row_invalid_n() {
        let mut record = sample_record();
        record.insert(COL_N, "abc");
        let err = record.to_row(7).unwrap_err();
        assert_eq!(err.kind, BenchErrorKind::InvalidValue);
        assert_eq!(err.field.as_deref(), Some(COL_N));
        assert_eq!(err.record, Some(7));
    }

    #[test]
    fn test_record_to_row_missing_column() {
        let mut record = Record::new();
        record.insert(COL_VARIANT, "naive");
        let err = record.to_row(1).unwrap_err();
        assert_eq!(err.kind, BenchErrorKind::MissingField);
        assert_eq!(err.field.as_deref(), Some(COL_DIST));
        assert_eq!(err.record, Some(1));
    }

    #[test]
    fn test_record_iter_is_sorted_by_column() {
        let record = sample_record();
        let columns: Vec<&str> = record.iter().map(|(k, _)| k).collect();
        assert_eq!(
            columns,
            vec!["bytes_allocated_per_op", "dist", "microseconds_per_op", "n", "variant"]
        );
    }
}
