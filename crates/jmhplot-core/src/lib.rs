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

//! Core data model for JMHPlot.
//!
//! This crate holds the types shared by the extraction, table and chart
//! pipelines:
//!
//! - [`Row`]: one typed benchmark measurement
//! - [`Record`]: one untyped table line, as read back from disk
//! - [`Distribution`] and [`Metric`]: the closed plot selectors
//! - [`BenchError`]: the error taxonomy every pipeline reports through
//!
//! # Examples
//!
//! ```
//! use jmhplot_core::{Record, Row};
//!
//! let row = Row::new("longSet", "RANDOM", 24, 1.0, 8264.0);
//! let record = Record::from(&row);
//!
//! assert_eq!(record.get("n"), Some("24"));
//! assert_eq!(record.to_row(0).unwrap(), row);
//! ```

mod coerce;
mod error;
mod row;
mod selector;

pub use coerce::{coerce_float, coerce_int};
pub use error::{BenchError, BenchErrorKind, Result};
pub use row::{
    format_float, Record, Row, COLUMNS, COL_BYTES_PER_OP, COL_DIST, COL_MICROS_PER_OP, COL_N,
    COL_VARIANT,
};
pub use selector::{Distribution, Metric};
