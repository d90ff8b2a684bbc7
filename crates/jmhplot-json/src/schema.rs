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

//! Serde schema for the subset of a JMH result record that is read.
//!
//! Only the fields the extractor needs are named; everything else JMH writes
//! (`mode`, `threads`, `scoreError`, `rawData`, ...) is ignored. Deserializing
//! a record never fails: leaf values are kept as [`RawScalar`] and nested
//! objects as raw JSON, so that a wrong type surfaces as an `InvalidValue`
//! error on that field instead of failing the whole record.

use jmhplot_core::{coerce_float, coerce_int, BenchError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Number, Value as JsonValue};

/// Key of the normalized allocation rate in `secondaryMetrics`.
pub const GC_ALLOC_RATE_NORM: &str = "gc.alloc.rate.norm";

/// One element of the top-level JMH result array.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    /// Fully qualified benchmark method, e.g. `com.example.Bench.longSet`.
    pub benchmark: Option<RawScalar>,
    /// Benchmark `@Param` values, see [`RawParams`].
    pub params: Option<JsonValue>,
    /// See [`RawMetric`].
    #[serde(rename = "primaryMetric")]
    pub primary_metric: Option<JsonValue>,
    /// Metric name to [`RawMetric`].
    #[serde(rename = "secondaryMetrics")]
    pub secondary_metrics: Option<JsonValue>,
}

/// The `params` object of a record.
#[derive(Debug, Clone, Deserialize)]
pub struct RawParams {
    pub dist: Option<RawScalar>,
    pub n: Option<RawScalar>,
}

/// A primary or secondary metric object.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMetric {
    pub score: Option<RawScalar>,
}

impl RawRecord {
    pub fn params(&self) -> Result<Option<RawParams>> {
        object(self.params.as_ref())
    }

    pub fn primary_metric(&self) -> Result<Option<RawMetric>> {
        object(self.primary_metric.as_ref())
    }

    pub fn secondary_metrics(&self) -> Result<Option<Map<String, JsonValue>>> {
        object(self.secondary_metrics.as_ref())
    }
}

/// Read an optional nested JSON object as `T`.
///
/// Absent and `null` values are `None`; anything other than an object is an
/// `InvalidValue` error without a field path.
pub fn object<T: DeserializeOwned>(value: Option<&JsonValue>) -> Result<Option<T>> {
    match value {
        None | Some(JsonValue::Null) => Ok(None),
        Some(value @ JsonValue::Object(_)) => T::deserialize(value)
            .map(Some)
            .map_err(|e| BenchError::invalid_value(format!("malformed object: {}", e))),
        Some(other) => Err(BenchError::invalid_value(format!(
            "expected an object, got {}",
            other
        ))),
    }
}

/// A JSON leaf value awaiting coercion.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawScalar {
    Number(Number),
    Text(String),
    Other(JsonValue),
}

impl RawScalar {
    /// Coerce to an integer. Strings must hold a base-10 integer; numbers
    /// must be integral.
    pub fn to_int(&self) -> Result<i64> {
        match self {
            RawScalar::Text(text) => coerce_int(text),
            RawScalar::Number(number) => number.as_i64().ok_or_else(|| {
                BenchError::invalid_value(format!(
                    "expected a base-10 integer, got {}",
                    number
                ))
            }),
            RawScalar::Other(value) => Err(BenchError::invalid_value(format!(
                "expected a base-10 integer, got {}",
                value
            ))),
        }
    }

    /// Coerce to a float. Numeric strings (including `NaN`) are accepted.
    pub fn to_float(&self) -> Result<f64> {
        match self {
            RawScalar::Text(text) => coerce_float(text),
            RawScalar::Number(number) => number.as_f64().ok_or_else(|| {
                BenchError::invalid_value(format!(
                    "expected a floating-point number, got {}",
                    number
                ))
            }),
            RawScalar::Other(value) => Err(BenchError::invalid_value(format!(
                "expected a floating-point number, got {}",
                value
            ))),
        }
    }

    /// Borrow as a string; any non-string value is rejected.
    pub fn as_text(&self) -> Result<&str> {
        match self {
            RawScalar::Text(text) => Ok(text),
            RawScalar::Number(number) => Err(BenchError::invalid_value(format!(
                "expected a string, got {}",
                number
            ))),
            RawScalar::Other(value) => Err(BenchError::invalid_value(format!(
                "expected a string, got {}",
                value
            ))),
        }
    }
}
