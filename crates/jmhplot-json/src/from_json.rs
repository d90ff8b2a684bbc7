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

//! JMH JSON to benchmark rows.

use crate::schema::{self, RawMetric, RawRecord, RawScalar, GC_ALLOC_RATE_NORM};
use jmhplot_core::{BenchError, BenchErrorKind, Distribution, Result, Row};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::io::Read;
use tracing::{debug, info, trace};

/// Field path of the benchmark identifier.
pub const FIELD_BENCHMARK: &str = "benchmark";
/// Field path of the benchmark parameters object.
pub const FIELD_PARAMS: &str = "params";
/// Field path of the distribution tag.
pub const FIELD_DIST: &str = "params.dist";
/// Field path of the input size.
pub const FIELD_N: &str = "params.n";
/// Field path of the primary metric object.
pub const FIELD_PRIMARY_METRIC: &str = "primaryMetric";
/// Field path of the timing score.
pub const FIELD_PRIMARY_SCORE: &str = "primaryMetric.score";
/// Field path of the secondary metrics object.
pub const FIELD_SECONDARY_METRICS: &str = "secondaryMetrics";
/// Field path of the allocation metric object.
pub const FIELD_ALLOC_METRIC: &str = "secondaryMetrics.gc.alloc.rate.norm";
/// Field path of the allocation score.
pub const FIELD_ALLOC_SCORE: &str = "secondaryMetrics.gc.alloc.rate.norm.score";

/// Configuration for row extraction.
///
/// # Examples
///
/// ```
/// use jmhplot_json::ExtractConfig;
///
/// let config = ExtractConfig {
///     verbose: true,
///     ..Default::default()
/// };
/// assert!(!config.strict_dist);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExtractConfig {
    /// Log every extracted row at `info` instead of `trace` (default: false)
    pub verbose: bool,

    /// Reject `params.dist` values outside GRID/RANDOM (default: false)
    ///
    /// Off by default: the distribution tag is copied verbatim and only
    /// checked when a chart is requested for it.
    pub strict_dist: bool,
}

/// Extract rows from JMH JSON text with the default configuration.
///
/// # Examples
///
/// ```
/// use jmhplot_json::from_json;
///
/// let json = r#"[{"benchmark":"pkg.Bench.longSet","params":{"dist":"RANDOM","n":"24"},
///     "primaryMetric":{"score":1.0},
///     "secondaryMetrics":{"gc.alloc.rate.norm":{"score":8264.0}}}]"#;
///
/// let rows = from_json(json).unwrap();
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].variant, "longSet");
/// assert_eq!(rows[0].n, 24);
/// ```
pub fn from_json(input: &str) -> Result<Vec<Row>> {
    from_json_with_config(input, &ExtractConfig::default())
}

/// Extract rows from JMH JSON text.
///
/// # Errors
///
/// Fails with `Format` if the text is not JSON or its top level is not an
/// array, and with the first record-level error otherwise. No rows are
/// returned on failure.
pub fn from_json_with_config(input: &str, config: &ExtractConfig) -> Result<Vec<Row>> {
    let value: JsonValue = serde_json::from_str(input).map_err(json_error)?;
    from_json_value(&value, config)
}

/// Extract rows from a reader producing JMH JSON.
pub fn from_json_reader<R: Read>(reader: R, config: &ExtractConfig) -> Result<Vec<Row>> {
    let value: JsonValue = serde_json::from_reader(reader).map_err(json_error)?;
    from_json_value(&value, config)
}

/// Extract rows from an already parsed JSON value.
///
/// Extraction is all-or-nothing: the first malformed record aborts the
/// batch and the rows built so far are discarded.
pub fn from_json_value(value: &JsonValue, config: &ExtractConfig) -> Result<Vec<Row>> {
    let records = value.as_array().ok_or_else(|| {
        BenchError::format(format!(
            "expected a JSON array of benchmark records, found {}",
            json_type_name(value)
        ))
    })?;

    debug!(records = records.len(), "extracting benchmark rows");

    let rows = records
        .iter()
        .enumerate()
        .map(|(index, item)| -> Result<Row> {
            let row = extract_item(item, config).map_err(|e| e.with_record(index))?;
            if config.verbose {
                info!(record = index, "{}", row);
            } else {
                trace!(record = index, "{}", row);
            }
            Ok(row)
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(rows = rows.len(), "extraction complete");
    Ok(rows)
}

fn extract_item(item: &JsonValue, config: &ExtractConfig) -> Result<Row> {
    if !item.is_object() {
        return Err(BenchError::format(format!(
            "expected a benchmark record object, found {}",
            json_type_name(item)
        )));
    }
    let record = RawRecord::deserialize(item)
        .map_err(|e| BenchError::format(format!("malformed benchmark record: {}", e)))?;
    extract_row(&record, config)
}

/// Build one row from a deserialized record.
///
/// Errors carry the offending field path but no record index.
pub fn extract_row(record: &RawRecord, config: &ExtractConfig) -> Result<Row> {
    let benchmark = record
        .benchmark
        .as_ref()
        .ok_or_else(|| BenchError::missing_field(FIELD_BENCHMARK))?
        .as_text()
        .map_err(|e| e.with_field(FIELD_BENCHMARK))?;
    let variant = benchmark.rsplit('.').next().unwrap_or(benchmark);

    let params = record
        .params()
        .map_err(|e| e.with_field(FIELD_PARAMS))?
        .ok_or_else(|| BenchError::missing_field(FIELD_PARAMS))?;

    let dist = params
        .dist
        .as_ref()
        .ok_or_else(|| BenchError::missing_field(FIELD_DIST))?
        .as_text()
        .map_err(|e| e.with_field(FIELD_DIST))?;
    if config.strict_dist {
        dist.parse::<Distribution>()
            .map_err(|e| e.with_field(FIELD_DIST))?;
    }

    let n = params
        .n
        .as_ref()
        .ok_or_else(|| BenchError::missing_field(FIELD_N))?
        .to_int()
        .map_err(|e| e.with_field(FIELD_N))?;

    let microseconds_per_op = record
        .primary_metric()
        .map_err(|e| e.with_field(FIELD_PRIMARY_METRIC))?
        .and_then(|m| m.score)
        .ok_or_else(|| BenchError::missing_field(FIELD_PRIMARY_SCORE))?
        .to_float()
        .map_err(|e| e.with_field(FIELD_PRIMARY_SCORE))?;

    let bytes_allocated_per_op = alloc_score(record)?
        .ok_or_else(|| BenchError::missing_field(FIELD_ALLOC_SCORE))?
        .to_float()
        .map_err(|e| e.with_field(FIELD_ALLOC_SCORE))?;

    Ok(Row::new(
        variant,
        dist,
        n,
        microseconds_per_op,
        bytes_allocated_per_op,
    ))
}

fn alloc_score(record: &RawRecord) -> Result<Option<RawScalar>> {
    let secondary = match record
        .secondary_metrics()
        .map_err(|e| e.with_field(FIELD_SECONDARY_METRICS))?
    {
        Some(secondary) => secondary,
        None => return Ok(None),
    };
    let metric: Option<RawMetric> = schema::object(secondary.get(GC_ALLOC_RATE_NORM))
        .map_err(|e| e.with_field(FIELD_ALLOC_METRIC))?;
    Ok(metric.and_then(|m| m.score))
}

fn json_error(err: serde_json::Error) -> BenchError {
    if err.is_io() {
        BenchError::new(BenchErrorKind::Io, err.to_string())
    } else {
        BenchError::format(format!("invalid JSON: {}", err))
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
