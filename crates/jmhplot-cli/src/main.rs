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

//! JMHPlot Command Line Interface

use clap::Parser;
use jmhplot_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// JMHPlot - tables and charts from JMH benchmark results
///
/// # Examples
///
/// ```bash
/// # Flatten JMH JSON output into a table
/// jmhplot extract --in results.json --out bench.csv
///
/// # Chart time per operation on the GRID distribution
/// jmhplot plot --in bench.csv --out plots/time-grid.png --dist GRID --type time
/// ```
#[derive(Parser)]
#[command(name = "jmhplot")]
#[command(author, version, about = "JMHPlot - tables and charts from JMH benchmark results", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.command.verbose());

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// Logs go to stderr; stdout carries progress lines only.
fn init_logging(verbose: bool) {
    let mut filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jmhplot=warn"));
    if verbose {
        filter = filter.add_directive("jmhplot=info".parse().expect("valid log directive"));
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
