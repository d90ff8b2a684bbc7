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

//! Extract command - JMH JSON results to a benchmark table

use super::{read_file, write_output, DEFAULT_MAX_FILE_SIZE};
use crate::error::CliError;
use colored::Colorize;
use jmhplot_json::{from_json_with_config, ExtractConfig};
use std::path::Path;
use tracing::debug;

/// Flatten a JMH JSON result file into a CSV table.
///
/// The whole table is built in memory first; on any error the output file
/// is left untouched.
///
/// # Errors
///
/// Returns `Err` if the input cannot be read, any record is malformed, or
/// the table cannot be written.
///
/// # Examples
///
/// ```no_run
/// use jmhplot_cli::commands::extract;
/// use std::path::Path;
///
/// # fn main() -> Result<(), jmhplot_cli::error::CliError> {
/// extract(Path::new("results.json"), Path::new("bench.csv"), false, false)?;
/// # Ok(())
/// # }
/// ```
///
/// # Output
///
/// Prints `Parsing <in>....` before reading and `Writing data to <out>`
/// before writing, followed by a ✓ line with the row count.
pub fn extract(input: &Path, output: &Path, verbose: bool, strict_dist: bool) -> Result<(), CliError> {
    println!("Parsing {}....", input.display());
    let json = read_file(input, DEFAULT_MAX_FILE_SIZE)?;

    let config = ExtractConfig {
        verbose,
        strict_dist,
    };
    let rows = match from_json_with_config(&json, &config) {
        Ok(rows) => rows,
        Err(e) => {
            println!("{} {}", "✗".red().bold(), input.display());
            return Err(CliError::extract(input, e));
        }
    };
    debug!(rows = rows.len(), "extracted rows");

    let table = jmhplot_csv::to_csv(&rows).map_err(|e| CliError::table(output, e))?;

    println!("Writing data to {}", output.display());
    write_output(output, &table)?;
    println!("{} {} ({} rows)", "✓".green().bold(), output.display(), rows.len());
    Ok(())
}
