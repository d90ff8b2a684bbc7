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

//! Shared test fixtures for the JMHPlot pipelines.
//!
//! # Quick Start
//!
//! ```rust
//! use jmhplot_test::fixtures;
//!
//! let json = fixtures::sweep_json();     // JMH result array, 18 records
//! let rows = fixtures::sweep_rows();     // the rows it extracts to
//! let table = fixtures::sweep_table();   // the CSV table of those rows
//!
//! assert_eq!(rows.len(), 18);
//! assert!(table.starts_with("variant,dist,n,"));
//! # let _ = json;
//! ```
//!
//! Malformed inputs live in [`fixtures::errors`].

pub mod fixtures;

use jmhplot_core::Row;
use std::fs;
use std::path::{Path, PathBuf};

/// Type alias for a list of named row fixtures.
pub type RowFixtureList = Vec<(&'static str, fn() -> Vec<Row>)>;

/// Count rows per distribution tag, in tag order.
pub fn count_by_dist(rows: &[Row]) -> Vec<(String, usize)> {
    let mut counts: std::collections::BTreeMap<String, usize> = Default::default();
    for row in rows {
        *counts.entry(row.dist.clone()).or_default() += 1;
    }
    counts.into_iter().collect()
}

/// Whether a TrueType or OpenType font is installed in a standard location.
///
/// Drawing text with plotters needs one; tests that write images return
/// early without it.
pub fn system_fonts_available() -> bool {
    let mut dirs: Vec<PathBuf> = [
        "/usr/share/fonts",
        "/usr/local/share/fonts",
        "/Library/Fonts",
        "/System/Library/Fonts",
        "C:\\Windows\\Fonts",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();
    if let Some(home) = std::env::var_os("HOME") {
        let home = PathBuf::from(home);
        dirs.push(home.join(".fonts"));
        dirs.push(home.join(".local").join("share").join("fonts"));
    }
    dirs.iter().any(|dir| contains_font(dir, 4))
}

fn contains_font(dir: &Path, depth: usize) -> bool {
    let Ok(entries) = fs::read_dir(dir) else {
        return false;
    };
    entries.flatten().any(|entry| {
        let path = entry.path();
        if path.is_dir() {
            depth > 0 && contains_font(&path, depth - 1)
        } else {
            let extension = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.to_ascii_lowercase());
            matches!(extension.as_deref(), Some("ttf" | "otf" | "ttc"))
        }
    })
}
