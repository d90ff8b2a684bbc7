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

//! Canonical benchmark fixtures.
//!
//! - **jmh**: JMH JSON documents and single-record builders
//! - **rows**: typed rows and the tables they serialize to
//! - **errors**: malformed JSON and tables for error-path tests

pub mod errors;
mod jmh;
mod rows;

pub use jmh::*;
pub use rows::*;

use crate::RowFixtureList;

/// Returns all row fixtures for iteration.
pub fn all() -> RowFixtureList {
    vec![
        ("empty", empty_rows),
        ("single", single_row),
        ("sweep", sweep_rows),
        ("duplicate_n", duplicate_n_rows),
        ("special_strings", special_string_rows),
    ]
}
