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

//! Typed coercion of untyped field values.
//!
//! The returned errors carry no location; callers attach the field path and
//! record index they know about.

use crate::error::{BenchError, Result};

/// Parse a base-10 integer, ignoring surrounding whitespace.
///
/// # Examples
///
/// ```
/// use jmhplot_core::coerce_int;
///
/// assert_eq!(coerce_int(" 24 ").unwrap(), 24);
/// assert!(coerce_int("abc").is_err());
/// assert!(coerce_int("2.5").is_err());
/// ```
pub fn coerce_int(raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        BenchError::invalid_value(format!("expected a base-10 integer, got {:?}", raw))
    })
}

/// Parse a floating-point number, ignoring surrounding whitespace.
///
/// Accepts the special values JMH can emit (`NaN`, `Infinity`).
pub fn coerce_float(raw: &str) -> Result<f64> {
    raw.trim().parse::<f64>().map_err(|_| {
        BenchError::invalid_value(format!("expected a floating-point number, got {:?}", raw))
    })
}
