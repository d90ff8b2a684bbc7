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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;
use jmhplot_chart::ChartConfig;
use jmhplot_core::{Distribution, Metric};
use std::path::PathBuf;

/// Top-level CLI commands.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use jmhplot_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    /// Extract a benchmark table from JMH JSON results
    ///
    /// Reads a JMH result array and writes one CSV line per benchmark
    /// record: variant, dist, n, microseconds_per_op,
    /// bytes_allocated_per_op.
    Extract {
        /// JMH JSON result file
        #[arg(short = 'i', long = "in", value_name = "FILE")]
        input: PathBuf,

        /// Output table path
        #[arg(short = 'o', long = "out", value_name = "FILE")]
        output: PathBuf,

        /// Log every extracted row
        #[arg(short, long)]
        verbose: bool,

        /// Reject distribution tags other than GRID and RANDOM
        #[arg(long)]
        strict_dist: bool,
    },

    /// Plot one metric of one distribution from a benchmark table
    ///
    /// Draws one line per variant on log2/log2 axes. Fails when the table
    /// has no rows for the chosen distribution.
    Plot {
        /// Benchmark table produced by `extract`
        #[arg(short = 'i', long = "in", value_name = "FILE")]
        input: PathBuf,

        /// Output image path (PNG, or SVG for a `.svg` extension)
        #[arg(short = 'o', long = "out", value_name = "FILE")]
        output: PathBuf,

        /// Data distribution to plot
        #[arg(short, long, value_enum)]
        dist: Distribution,

        /// Metric to plot
        #[arg(short = 't', long = "type", value_enum)]
        metric: Metric,

        /// Image width in pixels
        #[arg(long, default_value_t = ChartConfig::default().width)]
        width: u32,

        /// Image height in pixels
        #[arg(long, default_value_t = ChartConfig::default().height)]
        height: u32,
    },
}

impl Commands {
    /// Whether the command asked for row-level logging.
    pub fn verbose(&self) -> bool {
        matches!(self, Commands::Extract { verbose: true, .. })
    }

    /// Execute the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - File I/O fails
    /// - A record or table value is malformed
    /// - No rows match the requested distribution
    /// - The chart cannot be drawn
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Extract {
                input,
                output,
                verbose,
                strict_dist,
            } => commands::extract(&input, &output, verbose, strict_dist),
            Commands::Plot {
                input,
                output,
                dist,
                metric,
                width,
                height,
            } => commands::plot(
                &input,
                &output,
                dist,
                metric,
                &ChartConfig { width, height },
            ),
        }
    }
}
