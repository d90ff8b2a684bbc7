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

//! JMHPlot CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **extract**: JMH JSON results → CSV benchmark table
//! - **plot**: CSV benchmark table → log2/log2 chart for one distribution
//!   and one metric (`time` in μs/op or `mem` in bytes/op)
//!
//! # Examples
//!
//! ```no_run
//! use jmhplot_chart::ChartConfig;
//! use jmhplot_cli::commands::{extract, plot};
//! use jmhplot_core::{Distribution, Metric};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), jmhplot_cli::error::CliError> {
//! extract(Path::new("results.json"), Path::new("bench.csv"), false, false)?;
//! plot(
//!     Path::new("bench.csv"),
//!     Path::new("plots/mem-random.png"),
//!     Distribution::Random,
//!     Metric::Mem,
//!     &ChartConfig::default(),
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Commands return `Result<(), CliError>`. Errors name the file involved and,
//! for malformed data, the offending field and record.

pub mod cli;
pub mod commands;
pub mod error;
