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

//! Plot command - benchmark table to a log2/log2 chart

use super::{read_file, DEFAULT_MAX_FILE_SIZE};
use crate::error::CliError;
use colored::Colorize;
use jmhplot_chart::{aggregate, render_chart_with_config, ChartConfig};
use jmhplot_core::{Distribution, Metric};
use std::path::Path;

/// Chart one metric of one distribution from a benchmark table.
///
/// # Errors
///
/// Returns `Err` if the table cannot be read, holds no rows for `dist`, has
/// a value that does not coerce, or the image cannot be written.
///
/// # Output
///
/// Prints `Wrote plot -> <out>` on success.
pub fn plot(
    input: &Path,
    output: &Path,
    dist: Distribution,
    metric: Metric,
    config: &ChartConfig,
) -> Result<(), CliError> {
    let table = read_file(input, DEFAULT_MAX_FILE_SIZE)?;
    let records = jmhplot_csv::from_csv(&table).map_err(|e| CliError::table(input, e))?;

    let drawn = aggregate(&records, dist.as_str(), metric)
        .map_err(|e| CliError::plot(input, e))
        .and_then(|series| {
            render_chart_with_config(&series, dist.as_str(), metric, output, config)
                .map_err(|e| CliError::plot(output, e))
        });
    match drawn {
        Ok(layout) => {
            println!("Wrote plot -> {}", output.display());
            println!(
                "{} {} ({} variants)",
                "✓".green().bold(),
                layout.title,
                layout.entries.len()
            );
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), output.display());
            Err(e)
        }
    }
}
