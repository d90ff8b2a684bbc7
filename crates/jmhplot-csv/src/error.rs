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

//! Mapping of `csv` library errors onto the jmhplot taxonomy.

use jmhplot_core::BenchError;

/// Convert a `csv` error. I/O failures stay I/O failures; everything else
/// is a structural problem with the table.
pub(crate) fn csv_error(err: csv::Error) -> BenchError {
    match err.into_kind() {
        csv::ErrorKind::Io(io_err) => BenchError::from(io_err),
        csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => {
            let line = pos.map(|p| p.line()).unwrap_or(0);
            BenchError::format(format!(
                "row width mismatch at line {}: expected {} columns, got {}",
                line, expected_len, len
            ))
        }
        csv::ErrorKind::Utf8 { pos, err } => {
            let line = pos.map(|p| p.line()).unwrap_or(0);
            BenchError::format(format!("invalid UTF-8 at line {}: {}", line, err))
        }
        other => BenchError::format(format!("CSV error: {:?}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jmhplot_core::BenchErrorKind;
    use std::io;

    #[test]
    fn test_io_error_kind_preserved() {
        let err = csv_error(csv::Error::from(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "read-only",
        )));
        assert_eq!(err.kind, BenchErrorKind::Io);
        assert!(err.message.contains("read-only"));
    }
}
