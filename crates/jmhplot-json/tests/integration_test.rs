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

//! JMH documents → rows, over the shared fixtures.

use jmhplot_core::{BenchErrorKind, Row};
use jmhplot_json::{from_json, from_json_reader, from_json_value, from_json_with_config, ExtractConfig};
use jmhplot_test::fixtures::{self, errors};
use serde_json::{json, Value};

#[test]
fn test_single_record_document() {
    let rows = from_json(&fixtures::single_json()).unwrap();
    assert_eq!(rows, vec![Row::new("longSet", "RANDOM", 24, 1.0, 8264.0)]);
    assert_eq!(rows, fixtures::single_row());
}

#[test]
fn test_sweep_document_in_order() {
    let rows = from_json(&fixtures::sweep_json()).unwrap();
    assert_eq!(rows, fixtures::sweep_rows());
}

#[test]
fn test_reader_matches_text() {
    let json = fixtures::sweep_json();
    let from_reader = from_json_reader(json.as_bytes(), &ExtractConfig::default()).unwrap();
    assert_eq!(from_reader, from_json(&json).unwrap());
}

#[test]
fn test_verbose_does_not_change_rows() {
    let config = ExtractConfig {
        verbose: true,
        ..Default::default()
    };
    let rows = from_json_with_config(&fixtures::sweep_json(), &config).unwrap();
    assert_eq!(rows, fixtures::sweep_rows());
}

#[test]
fn test_non_array_documents_are_format_errors() {
    for (name, document) in errors::non_array_documents() {
        let err = from_json(&document).unwrap_err();
        assert_eq!(err.kind, BenchErrorKind::Format, "document: {}", name);
    }
}

#[test]
fn test_broken_records_name_their_field() {
    for (name, record, field, kind) in errors::broken_records() {
        let err = from_json_value(&json!([record]), &ExtractConfig::default()).unwrap_err();
        assert_eq!(format!("{:?}", err.kind), kind, "record: {}", name);
        assert_eq!(err.field.as_deref(), Some(field), "record: {}", name);
        assert_eq!(err.record, Some(0), "record: {}", name);
    }
}

#[test]
fn test_extraction_is_all_or_nothing() {
    for (name, broken, field, _) in errors::broken_records() {
        let mut document = fixtures::sweep_value();
        let records = document.as_array_mut().unwrap();
        let position = records.len() / 2;
        records.insert(position, broken);

        let err = from_json_value(&document, &ExtractConfig::default()).unwrap_err();
        assert_eq!(err.record, Some(position), "record: {}", name);
        assert_eq!(err.field.as_deref(), Some(field), "record: {}", name);
    }
}

#[test]
fn test_error_message_names_field_and_record() {
    let mut document = fixtures::sweep_value();
    document[3]["params"]["n"] = json!("abc");
    let err = from_json_value(&document, &ExtractConfig::default()).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("InvalidValueError"), "{}", message);
    assert!(message.contains("record 3"), "{}", message);
    assert!(message.contains("params.n"), "{}", message);
}

#[test]
fn test_non_object_record_is_format_error() {
    let err = from_json(r#"[1, 2]"#).unwrap_err();
    assert_eq!(err.kind, BenchErrorKind::Format);
    assert_eq!(err.record, Some(0));
}

#[test]
fn test_special_score_strings() {
    let mut record = fixtures::jmh_record("pointSet", "GRID", "32", 1.0, 2.0);
    record["primaryMetric"]["score"] = json!("NaN");
    record["secondaryMetrics"]["gc.alloc.rate.norm"]["score"] = json!("Infinity");
    let rows = from_json_value(&Value::Array(vec![record]), &ExtractConfig::default()).unwrap();
    assert!(rows[0].microseconds_per_op.is_nan());
    assert_eq!(rows[0].bytes_allocated_per_op, f64::INFINITY);
}

#[test]
fn test_strict_dist() {
    let record = fixtures::jmh_record("pointSet", "CLUSTERED", "32", 1.0, 2.0);
    let document = Value::Array(vec![record]);

    let rows = from_json_value(&document, &ExtractConfig::default()).unwrap();
    assert_eq!(rows[0].dist, "CLUSTERED");

    let strict = ExtractConfig {
        strict_dist: true,
        ..Default::default()
    };
    let err = from_json_value(&document, &strict).unwrap_err();
    assert_eq!(err.kind, BenchErrorKind::InvalidValue);
    assert_eq!(err.field.as_deref(), Some("params.dist"));
}
