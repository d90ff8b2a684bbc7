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

//! Read a benchmark CSV table back into untyped records.

use crate::error::csv_error;
use jmhplot_core::{BenchError, Record, Result, Row, COLUMNS};
use std::io::Read;
use tracing::debug;

/// Configuration for CSV input.
#[derive(Debug, Clone)]
pub struct FromCsvConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Trim whitespace around header names and values (default: false)
    pub trim: bool,
}

impl Default for FromCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: false,
        }
    }
}

/// Parse a CSV table string into records.
///
/// # Example
/// ```
/// use jmhplot_csv::from_csv;
///
/// let table = "variant,dist,n,microseconds_per_op,bytes_allocated_per_op\n\
///              longSet,RANDOM,24,1.0,8264.0\n";
/// let records = from_csv(table).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].get("variant"), Some("longSet"));
/// assert_eq!(records[0].get("n"), Some("24"));
/// ```
pub fn from_csv(input: &str) -> Result<Vec<Record>> {
    from_csv_reader(input.as_bytes())
}

/// Parse a CSV table from a reader into records.
pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<Record>> {
    from_csv_reader_with_config(reader, FromCsvConfig::default())
}

/// Parse a CSV table from a reader with custom configuration.
///
/// The header must be exactly
/// `variant,dist,n,microseconds_per_op,bytes_allocated_per_op`. Values are
/// returned as read; see [`Record::to_row`] for coercion.
///
/// # Errors
///
/// - `Format` if the header is missing or differs from the fixed schema
/// - `Format` if a data line has a different number of fields than the header
/// - `Io` if reading fails
pub fn from_csv_reader_with_config<R: Read>(
    reader: R,
    config: FromCsvConfig,
) -> Result<Vec<Record>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(csv_error)?.clone();
    check_header(&headers)?;

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let line = result.map_err(csv_error)?;
        let mut record = Record::new();
        for (column, value) in headers.iter().zip(line.iter()) {
            record.insert(column, value);
        }
        records.push(record);
    }

    debug!(records = records.len(), "read CSV table");
    Ok(records)
}

/// Parse a CSV table and coerce every record into a [`Row`].
///
/// Fails with `InvalidValue` naming the column and record index of the
/// first value that does not coerce.
pub fn from_csv_rows(input: &str) -> Result<Vec<Row>> {
    from_csv(input)?
        .iter()
        .enumerate()
        .map(|(index, record)| record.to_row(index))
        .collect()
}

fn check_header(headers: &csv::StringRecord) -> Result<()> {
    if headers.is_empty() {
        return Err(BenchError::format("missing table header"));
    }
    if !headers.iter().eq(COLUMNS.iter().copied()) {
        let found: Vec<&str> = headers.iter().collect();
        return Err(BenchError::format(format!(
            "unexpected table header '{}', expected '{}'",
            found.join(","),
            COLUMNS.join(",")
        )));
    }
    Ok(())
}
