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

//! Malformed inputs for error-path tests.

use super::jmh::jmh_record;
use super::rows::HEADER;
use serde_json::{json, Value};

/// Kind of failure a malformed sample is expected to raise, by name.
pub type ExpectedKind = &'static str;

/// JSON documents whose top level is not a record array.
pub fn non_array_documents() -> Vec<(&'static str, String)> {
    vec![
        ("object", r#"{"benchmark": "pkg.Bench.longSet"}"#.to_string()),
        ("null", "null".to_string()),
        ("number", "42".to_string()),
        ("string", r#""results""#.to_string()),
        ("truncated", r#"[{"benchmark": "#.to_string()),
    ]
}

/// Records broken in exactly one field: (name, record, field path, kind).
pub fn broken_records() -> Vec<(&'static str, Value, &'static str, ExpectedKind)> {
    let valid = || jmh_record("longSet", "GRID", "24", 1.0, 8264.0);

    let mut n_not_int = valid();
    n_not_int["params"]["n"] = json!("abc");

    let mut n_float = valid();
    n_float["params"]["n"] = json!("24.5");

    let mut score_text = valid();
    score_text["primaryMetric"]["score"] = json!("fast");

    let mut alloc_text = valid();
    alloc_text["secondaryMetrics"]["gc.alloc.rate.norm"]["score"] = json!("lots");

    let mut no_benchmark = valid();
    remove(&mut no_benchmark, &[], "benchmark");

    let mut no_n = valid();
    remove(&mut no_n, &["params"], "n");

    let mut no_dist = valid();
    remove(&mut no_dist, &["params"], "dist");

    let mut no_alloc = valid();
    remove(&mut no_alloc, &["secondaryMetrics"], "gc.alloc.rate.norm");

    let mut no_primary = valid();
    remove(&mut no_primary, &[], "primaryMetric");

    let mut no_params = valid();
    remove(&mut no_params, &[], "params");

    let mut benchmark_number = valid();
    benchmark_number["benchmark"] = json!(5);

    let mut params_text = valid();
    params_text["params"] = json!("GRID");

    let mut primary_number = valid();
    primary_number["primaryMetric"] = json!(7);

    let mut secondary_list = valid();
    secondary_list["secondaryMetrics"] = json!([]);

    vec![
        ("n_not_int", n_not_int, "params.n", "InvalidValue"),
        ("n_float_text", n_float, "params.n", "InvalidValue"),
        ("score_text", score_text, "primaryMetric.score", "InvalidValue"),
        ("alloc_text", alloc_text, "secondaryMetrics.gc.alloc.rate.norm.score", "InvalidValue"),
        ("no_benchmark", no_benchmark, "benchmark", "MissingField"),
        ("no_n", no_n, "params.n", "MissingField"),
        ("no_dist", no_dist, "params.dist", "MissingField"),
        ("no_alloc", no_alloc, "secondaryMetrics.gc.alloc.rate.norm.score", "MissingField"),
        ("no_primary", no_primary, "primaryMetric.score", "MissingField"),
        ("no_params", no_params, "params", "MissingField"),
        ("benchmark_number", benchmark_number, "benchmark", "InvalidValue"),
        ("params_text", params_text, "params", "InvalidValue"),
        ("primary_number", primary_number, "primaryMetric", "InvalidValue"),
        ("secondary_list", secondary_list, "secondaryMetrics", "InvalidValue"),
    ]
}

fn remove(value: &mut Value, path: &[&str], key: &str) {
    let mut target = value;
    for segment in path {
        target = &mut target[*segment];
    }
    if let Some(object) = target.as_object_mut() {
        object.remove(key);
    }
}

/// Tables whose header does not match the fixed schema.
pub fn bad_headers() -> Vec<(&'static str, String)> {
    vec![
        ("empty", String::new()),
        (
            "reordered",
            "dist,variant,n,microseconds_per_op,bytes_allocated_per_op\nGRID,a,1,1.0,1.0\n"
                .to_string(),
        ),
        (
            "renamed",
            "variant,dist,size,microseconds_per_op,bytes_allocated_per_op\n".to_string(),
        ),
        ("short", "variant,dist,n\n".to_string()),
        (
            "extra",
            format!("{},notes\n", HEADER),
        ),
        (
            "uppercase",
            "VARIANT,DIST,N,MICROSECONDS_PER_OP,BYTES_ALLOCATED_PER_OP\n".to_string(),
        ),
    ]
}
