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

//! Benchmark table → per-variant series → chart.
//!
//! [`aggregate`] filters table records to one data distribution and groups
//! the chosen metric by variant. [`ChartLayout::new`] turns the result into
//! plain presentation values (title, labels, power-of-two log2 axis ranges,
//! legend order and colours), and [`render_chart`] draws that layout with
//! plotters.
//!
//! ```no_run
//! use jmhplot_chart::{aggregate, render_chart};
//! use jmhplot_core::Metric;
//! use std::path::Path;
//!
//! let table = std::fs::read_to_string("bench.csv").unwrap();
//! let records = jmhplot_csv::from_csv(&table).unwrap();
//! let series = aggregate(&records, "GRID", Metric::Time).unwrap();
//! render_chart(&series, "GRID", Metric::Time, Path::new("plots/time.png")).unwrap();
//! ```

mod aggregate;
mod layout;
mod render;

pub use aggregate::{aggregate, Series, SeriesPoint};
pub use layout::{
    format_tick, title, y_label, ChartConfig, ChartLayout, LegendEntry, LEGEND_TITLE,
    PALETTE_SIZE, X_LABEL,
};
pub use render::{render_chart, render_chart_with_config};
