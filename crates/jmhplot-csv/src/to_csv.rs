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

//! Write benchmark rows as a CSV table.

use crate::error::csv_error;
use jmhplot_core::{BenchError, Result, Row, COLUMNS};
use std::io::Write;
use tracing::debug;

/// Configuration for CSV output.
#[derive(Debug, Clone)]
pub struct ToCsvConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Quote style for fields (default: necessary)
    pub quote_style: csv::QuoteStyle,
}

impl Default for ToCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote_style: csv::QuoteStyle::Necessary,
        }
    }
}

/// Convert rows to a CSV string.
///
/// # Example
/// ```
/// use jmhplot_core::Row;
/// use jmhplot_csv::to_csv;
///
/// let rows = vec![Row::new("longSet", "RANDOM", 24, 1.0, 8264.0)];
/// let table = to_csv(&rows).unwrap();
/// assert_eq!(
///     table,
///     "variant,dist,n,microseconds_per_op,bytes_allocated_per_op\n\
///      longSet,RANDOM,24,1.0,8264.0\n"
/// );
/// ```
pub fn to_csv(rows: &[Row]) -> Result<String> {
    let mut buffer = Vec::with_capacity(64 * (rows.len() + 1));
    to_csv_writer(rows, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| BenchError::format(format!("CSV output is not UTF-8: {}", e)))
}

/// Write rows to CSV format using a writer.
///
/// # Example
/// ```no_run
/// use jmhplot_csv::to_csv_writer;
/// use std::fs::File;
///
/// let file = File::create("results.csv").unwrap();
/// to_csv_writer(&[], file).unwrap();
/// ```
pub fn to_csv_writer<W: Write>(rows: &[Row], writer: W) -> Result<()> {
    to_csv_writer_with_config(rows, writer, ToCsvConfig::default())
}

/// Write rows to CSV format with custom configuration.
///
/// The header line is always written, so an empty slice produces a table
/// with the header only. Only I/O failures of `writer` can fail this call.
pub fn to_csv_writer_with_config<W: Write>(
    rows: &[Row],
    writer: W,
    config: ToCsvConfig,
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote_style(config.quote_style)
        .from_writer(writer);

    wtr.write_record(COLUMNS).map_err(csv_error)?;

    for row in rows {
        wtr.write_record(row.to_fields()).map_err(csv_error)?;
    }

    wtr.flush()?;
    debug!(rows = rows.len(), "wrote CSV table");
    Ok(())
}
