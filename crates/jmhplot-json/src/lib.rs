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

//! JMH JSON result extraction.
//!
//! Turns the JSON array written by `java -jar benchmarks.jar -rf json` into
//! flat, typed [`Row`](jmhplot_core::Row)s. Each record contributes exactly
//! one row:
//!
//! | Row field                | JMH source                                      |
//! |--------------------------|-------------------------------------------------|
//! | `variant`                | last `.` segment of `benchmark`                 |
//! | `dist`                   | `params.dist`                                   |
//! | `n`                      | `params.n`, parsed as a base-10 integer         |
//! | `microseconds_per_op`    | `primaryMetric.score`                           |
//! | `bytes_allocated_per_op` | `secondaryMetrics["gc.alloc.rate.norm"].score`  |
//!
//! Extraction is all-or-nothing: the first malformed record fails the whole
//! batch with an error naming the record index and field path.
//!
//! # Examples
//!
//! ```
//! use jmhplot_core::BenchErrorKind;
//! use jmhplot_json::from_json;
//!
//! let json = r#"[{"benchmark":"pkg.Bench.longSet","params":{"dist":"RANDOM","n":"abc"},
//!     "primaryMetric":{"score":1.0},
//!     "secondaryMetrics":{"gc.alloc.rate.norm":{"score":8264.0}}}]"#;
//!
//! let err = from_json(json).unwrap_err();
//! assert_eq!(err.kind, BenchErrorKind::InvalidValue);
//! assert_eq!(err.field.as_deref(), Some("params.n"));
//! ```

mod from_json;
pub mod schema;

pub use from_json::{
    extract_row, from_json, from_json_reader, from_json_value, from_json_with_config,
    ExtractConfig, FIELD_ALLOC_METRIC, FIELD_ALLOC_SCORE, FIELD_BENCHMARK, FIELD_DIST, FIELD_N,
    FIELD_PARAMS, FIELD_PRIMARY_METRIC, FIELD_PRIMARY_SCORE, FIELD_SECONDARY_METRICS,
};
