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

//! CLI integration tests

use assert_cmd::Command;
use jmhplot_test::fixtures;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn jmhplot_cmd() -> Command {
    Command::cargo_bin("jmhplot").expect("Failed to find jmhplot binary")
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write temp file");
    path
}

fn extract_cmd(input: &Path, output: &Path) -> Command {
    let mut cmd = jmhplot_cmd();
    cmd.arg("extract").arg("--in").arg(input).arg("--out").arg(output);
    cmd
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    jmhplot_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("extract"))
        .stdout(predicate::str::contains("plot"));
}

#[test]
fn test_version_output() {
    jmhplot_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("jmhplot"));
}

#[test]
fn test_no_subcommand_fails() {
    jmhplot_cmd().assert().failure();
}

// ===== Extract Command Tests =====

#[test]
fn test_extract_single_record() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "results.json", &fixtures::single_json());
    let output = dir.path().join("bench.csv");

    extract_cmd(&input, &output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Parsing "))
        .stdout(predicate::str::contains("Writing data to "));

    let table = fs::read_to_string(&output).unwrap();
    assert_eq!(
        table,
        format!("{}\nlongSet,RANDOM,24,1.0,8264.0\n", fixtures::HEADER)
    );
}

#[test]
fn test_extract_sweep_matches_table_fixture() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "results.json", &fixtures::sweep_json());
    let output = dir.path().join("out").join("bench.csv");

    jmhplot_cmd()
        .args(["extract", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("-v")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), fixtures::sweep_table());
}

#[test]
fn test_extract_bad_n_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let json = fixtures::single_json().replace(r#""n":"24""#, r#""n":"abc""#);
    let input = write_file(&dir, "results.json", &json);
    let output = dir.path().join("bench.csv");

    extract_cmd(&input, &output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("InvalidValueError"))
        .stderr(predicate::str::contains("params.n"));

    assert!(!output.exists());
}

#[test]
fn test_extract_failure_keeps_previous_table() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "results.json", "{\"not\": \"an array\"}");
    let output = write_file(&dir, "bench.csv", "previous\n");

    extract_cmd(&input, &output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("FormatError"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "previous\n");
}

#[test]
fn test_extract_missing_input() {
    let dir = TempDir::new().unwrap();
    extract_cmd(&dir.path().join("absent.json"), &dir.path().join("bench.csv"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_extract_strict_dist() {
    let dir = TempDir::new().unwrap();
    let json = fixtures::single_json().replace("RANDOM", "CLUSTERED");
    let input = write_file(&dir, "results.json", &json);
    let output = dir.path().join("bench.csv");

    extract_cmd(&input, &output).assert().success();

    extract_cmd(&input, &output)
        .arg("--strict-dist")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("params.dist"));
}

// ===== Plot Command Tests =====

#[test]
fn test_plot_missing_dist_is_empty_result() {
    let dir = TempDir::new().unwrap();
    let grid_only: Vec<_> = fixtures::sweep_rows()
        .into_iter()
        .filter(|row| row.dist == "GRID")
        .collect();
    let input = write_file(&dir, "bench.csv", &fixtures::table_for(&grid_only));
    let output = dir.path().join("plot.png");

    jmhplot_cmd()
        .arg("plot")
        .arg("--in")
        .arg(&input)
        .arg("--out")
        .arg(&output)
        .args(["--dist", "RANDOM", "--type", "time"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("EmptyResultError"))
        .stderr(predicate::str::contains("dist=RANDOM"));

    assert!(!output.exists());
}

#[test]
fn test_plot_bad_header() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "bench.csv", "a,b\n1,2\n");

    jmhplot_cmd()
        .arg("plot")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("plot.png"))
        .args(["-d", "GRID", "-t", "mem"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unexpected table header"));
}

#[test]
fn test_plot_rejects_unknown_dist() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "bench.csv", &fixtures::sweep_table());

    jmhplot_cmd()
        .arg("plot")
        .arg("--in")
        .arg(&input)
        .arg("--out")
        .arg(dir.path().join("plot.png"))
        .args(["--dist", "grid", "--type", "time"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_plot_rejects_unknown_type() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "bench.csv", &fixtures::sweep_table());

    jmhplot_cmd()
        .arg("plot")
        .arg("--in")
        .arg(&input)
        .arg("--out")
        .arg(dir.path().join("plot.png"))
        .args(["--dist", "GRID", "--type", "ops"])
        .assert()
        .failure();
}

#[test]
fn test_extract_then_plot() {
    if !jmhplot_test::system_fonts_available() {
        eprintln!("skipping {}: no system fonts", "test_extract_then_plot");
        return;
    }
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "results.json", &fixtures::sweep_json());
    let table = dir.path().join("bench.csv");
    let image = dir.path().join("plots").join("time-grid.png");

    extract_cmd(&input, &table).assert().success();

    jmhplot_cmd()
        .arg("plot")
        .arg("--in")
        .arg(&table)
        .arg("--out")
        .arg(&image)
        .args(["--dist", "GRID", "--type", "time", "--width", "640", "--height", "400"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote plot -> "));

    assert!(fs::metadata(&image).unwrap().len() > 0);
}
