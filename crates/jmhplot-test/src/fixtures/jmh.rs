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

//! JMH JSON result documents.

use serde_json::{json, Value};

/// Package-qualified benchmark class used by the fixtures.
pub const BENCH_CLASS: &str = "com.priyakdey.CountSquaresBench";

/// Variants measured in [`sweep_json`], in JMH output order.
pub const SWEEP_VARIANTS: [&str; 3] = ["longSet", "pointSet", "primitiveLongSet"];

/// Distributions measured in [`sweep_json`], in JMH output order.
pub const SWEEP_DISTS: [&str; 2] = ["GRID", "RANDOM"];

/// Input sizes measured in [`sweep_json`].
pub const SWEEP_NS: [i64; 3] = [24, 32, 64];

/// Build one JMH record the way JMH 1.37 writes it, with the fields the
/// extractor ignores filled in too.
pub fn jmh_record(method: &str, dist: &str, n: &str, us_per_op: f64, bytes_per_op: f64) -> Value {
    json!({
        "jmhVersion": "1.37",
        "benchmark": format!("{}.{}", BENCH_CLASS, method),
        "mode": "avgt",
        "threads": 1,
        "forks": 1,
        "params": {"dist": dist, "n": n},
        "primaryMetric": {
            "score": us_per_op,
            "scoreError": us_per_op / 100.0,
            "scoreConfidence": [us_per_op * 0.99, us_per_op * 1.01],
            "scoreUnit": "us/op",
            "rawData": [[us_per_op, us_per_op]]
        },
        "secondaryMetrics": {
            "gc.alloc.rate": {"score": 1843.7, "scoreUnit": "MB/sec"},
            "gc.alloc.rate.norm": {"score": bytes_per_op, "scoreUnit": "B/op"},
            "gc.count": {"score": 12.0, "scoreUnit": "counts"}
        }
    })
}

/// Timing and allocation of a sweep point, deterministic in its inputs.
pub fn sweep_measurement(variant_index: usize, dist_index: usize, n: i64) -> (f64, f64) {
    let scale = (variant_index + 1) as f64;
    let us = scale * (n as f64) * (n as f64) / 256.0 + dist_index as f64;
    let bytes = 64.0 * scale * n as f64 + 8.0 * dist_index as f64;
    (us, bytes)
}

/// A complete sweep: every variant × distribution × n, in JMH order.
pub fn sweep_value() -> Value {
    let mut records = Vec::new();
    for (vi, variant) in SWEEP_VARIANTS.iter().enumerate() {
        for (di, dist) in SWEEP_DISTS.iter().enumerate() {
            for n in SWEEP_NS {
                let (us, bytes) = sweep_measurement(vi, di, n);
                records.push(jmh_record(variant, dist, &n.to_string(), us, bytes));
            }
        }
    }
    Value::Array(records)
}

/// [`sweep_value`] as JSON text.
pub fn sweep_json() -> String {
    sweep_value().to_string()
}

/// The single-record document from the format description.
pub fn single_json() -> String {
    r#"[{"benchmark":"pkg.Bench.longSet","params":{"dist":"RANDOM","n":"24"},"primaryMetric":{"score":1.0},"secondaryMetrics":{"gc.alloc.rate.norm":{"score":8264.0}}}]"#
        .to_string()
}
