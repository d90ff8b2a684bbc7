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

//! Table writer/reader tests against the shared fixtures.

use jmhplot_core::{BenchErrorKind, Row};
use jmhplot_csv::{from_csv, from_csv_rows, to_csv};
use jmhplot_test::fixtures;
use proptest::prelude::*;

#[test]
fn test_single_row_table_text() {
    let table = to_csv(&fixtures::single_row()).unwrap();
    assert_eq!(
        table,
        "variant,dist,n,microseconds_per_op,bytes_allocated_per_op\nlongSet,RANDOM,24,1.0,8264.0\n"
    );
}

#[test]
fn test_writer_matches_hand_built_table() {
    let rows = fixtures::sweep_rows();
    assert_eq!(to_csv(&rows).unwrap(), fixtures::sweep_table());
}

#[test]
fn test_all_fixtures_round_trip() {
    for (name, fixture) in fixtures::all() {
        let rows = fixture();
        let table = to_csv(&rows).unwrap();
        let back = from_csv_rows(&table).unwrap();
        assert_eq!(back, rows, "fixture {}", name);
    }
}

#[test]
fn test_special_strings_are_quoted() {
    let table = to_csv(&fixtures::special_string_rows()).unwrap();
    assert!(table.contains("\"set,with,commas\""));
    assert!(table.contains("\"quoted \"\"name\"\"\""));
    assert!(table.contains("\"multi\nline\""));
}

#[test]
fn test_bad_headers_rejected() {
    for (name, table) in fixtures::errors::bad_headers() {
        let err = from_csv(&table).unwrap_err();
        assert_eq!(err.kind, BenchErrorKind::Format, "fixture {}", name);
    }
}

#[test]
fn test_reader_preserves_line_order() {
    let records = from_csv(&fixtures::sweep_table()).unwrap();
    let expected = fixtures::sweep_rows();
    assert_eq!(records.len(), expected.len());
    for (record, row) in records.iter().zip(&expected) {
        assert_eq!(record.get("variant"), Some(row.variant.as_str()));
        assert_eq!(record.get("n"), Some(row.n.to_string().as_str()));
    }
}

fn variant() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z0-9_,\" ]{0,15}")
        .expect("Failed to create variant regex")
}

fn dist() -> impl Strategy<Value = String> {
    prop_oneof![Just("GRID".to_string()), Just("RANDOM".to_string())]
}

fn metric() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("Must be finite", |f| f.is_finite())
}

fn row() -> impl Strategy<Value = Row> {
    (variant(), dist(), any::<i64>(), metric(), metric())
        .prop_map(|(v, d, n, us, bytes)| Row::new(v, d, n, us, bytes))
}

proptest! {
    #[test]
    fn prop_write_then_read_preserves_rows(rows in prop::collection::vec(row(), 0..40)) {
        let table = to_csv(&rows).unwrap();
        let back = from_csv_rows(&table).unwrap();
        prop_assert_eq!(back, rows);
    }

    #[test]
    fn prop_one_line_per_row(rows in prop::collection::vec(row(), 0..40)) {
        let table = to_csv(&rows).unwrap();
        let records = from_csv(&table).unwrap();
        prop_assert_eq!(records.len(), rows.len());
    }
}
