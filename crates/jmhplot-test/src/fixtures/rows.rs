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

//! Typed rows and their tables.

use super::jmh::{sweep_measurement, SWEEP_DISTS, SWEEP_NS, SWEEP_VARIANTS};
use jmhplot_core::Row;

/// The fixed table header line.
pub const HEADER: &str = "variant,dist,n,microseconds_per_op,bytes_allocated_per_op";

pub fn empty_rows() -> Vec<Row> {
    Vec::new()
}

/// The row extracted from [`single_json`](super::single_json).
pub fn single_row() -> Vec<Row> {
    vec![Row::new("longSet", "RANDOM", 24, 1.0, 8264.0)]
}

/// The rows extracted from [`sweep_json`](super::sweep_json), in order.
pub fn sweep_rows() -> Vec<Row> {
    let mut rows = Vec::new();
    for (vi, variant) in SWEEP_VARIANTS.iter().enumerate() {
        for (di, dist) in SWEEP_DISTS.iter().enumerate() {
            for n in SWEEP_NS {
                let (us, bytes) = sweep_measurement(vi, di, n);
                rows.push(Row::new(*variant, *dist, n, us, bytes));
            }
        }
    }
    rows
}

/// Rows out of n order with repeated n values inside one variant.
pub fn duplicate_n_rows() -> Vec<Row> {
    vec![
        Row::new("pointSet", "GRID", 64, 9.0, 900.0),
        Row::new("longSet", "GRID", 32, 2.0, 200.0),
        Row::new("pointSet", "GRID", 24, 7.0, 700.0),
        Row::new("pointSet", "RANDOM", 24, 70.0, 7000.0),
        Row::new("pointSet", "GRID", 64, 8.0, 800.0),
        Row::new("longSet", "GRID", 24, 1.0, 100.0),
    ]
}

/// Variant names that need quoting in a comma-delimited table.
pub fn special_string_rows() -> Vec<Row> {
    vec![
        Row::new("set,with,commas", "GRID", 24, 1.5, 16.0),
        Row::new("quoted \"name\"", "GRID", 32, 2.5, 32.0),
        Row::new("multi\nline", "RANDOM", 48, 3.5, 48.0),
    ]
}

/// The table text for `rows`, built by hand for comparison with the writer.
pub fn table_for(rows: &[Row]) -> String {
    let mut table = String::from(HEADER);
    table.push('\n');
    for row in rows {
        table.push_str(&row.to_fields().join(","));
        table.push('\n');
    }
    table
}

/// Table of [`sweep_rows`].
pub fn sweep_table() -> String {
    table_for(&sweep_rows())
}
