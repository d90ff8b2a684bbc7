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

//! Benchmark rows ↔ CSV table.
//!
//! The table is the only contract between extraction and charting. Its
//! header is fixed:
//!
//! ```text
//! variant,dist,n,microseconds_per_op,bytes_allocated_per_op
//! ```
//!
//! followed by one line per row. No type information is stored; readers get
//! back string-valued [`Record`](jmhplot_core::Record)s and coerce them.
//!
//! # Round-trip
//!
//! ```
//! use jmhplot_core::Row;
//! use jmhplot_csv::{from_csv, to_csv};
//!
//! let rows = vec![
//!     Row::new("longSet", "RANDOM", 24, 1.0, 8264.0),
//!     Row::new("pointSet", "GRID", 4096, 1834.25, 524312.0),
//! ];
//! let table = to_csv(&rows).unwrap();
//! let records = from_csv(&table).unwrap();
//!
//! let back: Vec<Row> = records
//!     .iter()
//!     .enumerate()
//!     .map(|(i, r)| r.to_row(i).unwrap())
//!     .collect();
//! assert_eq!(back, rows);
//! ```

mod error;
mod from_csv;
mod to_csv;

// Re-export public API
pub use from_csv::{
    from_csv, from_csv_reader, from_csv_reader_with_config, from_csv_rows, FromCsvConfig,
};
pub use to_csv::{to_csv, to_csv_writer, to_csv_writer_with_config, ToCsvConfig};
