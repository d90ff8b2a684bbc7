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

//! Structured error types for the JMHPlot CLI.
//!
//! Library errors arrive as [`BenchError`]; the CLI adds the path of the
//! file being processed so the final message names it.

use jmhplot_core::BenchError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reported by CLI commands.
///
/// # Examples
///
/// ```rust,no_run
/// use jmhplot_cli::error::CliError;
///
/// fn read(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the maximum allowed limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
        max_mb: u64,
    },

    /// Benchmark JSON could not be turned into rows.
    #[error("cannot extract '{path}': {source}")]
    Extract {
        path: PathBuf,
        #[source]
        source: BenchError,
    },

    /// A table could not be written or read back.
    #[error("cannot process table '{path}': {source}")]
    Table {
        path: PathBuf,
        #[source]
        source: BenchError,
    },

    /// Aggregation or drawing failed.
    #[error("cannot plot '{path}': {source}")]
    Plot {
        path: PathBuf,
        #[source]
        source: BenchError,
    },
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    pub fn extract(path: &Path, source: BenchError) -> Self {
        Self::Extract {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn table(path: &Path, source: BenchError) -> Self {
        Self::Table {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn plot(path: &Path, source: BenchError) -> Self {
        Self::Plot {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The library error underneath, if any.
    pub fn bench_error(&self) -> Option<&BenchError> {
        match self {
            Self::Extract { source, .. } | Self::Table { source, .. } | Self::Plot { source, .. } => {
                Some(source)
            }
            Self::Io { .. } | Self::FileTooLarge { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jmhplot_core::BenchErrorKind;

    #[test]
    fn test_io_error_names_path() {
        let err = CliError::io_error(
            "results.json",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.to_string(), "I/O error for 'results.json': not found");
        assert!(err.bench_error().is_none());
    }

    #[test]
    fn test_file_too_large_reports_megabytes() {
        let err = CliError::file_too_large("big.json", 3 * 1024 * 1024, 2 * 1024 * 1024);
        assert!(err.to_string().contains("(2 MB)"));
    }

    #[test]
    fn test_wrapped_error_keeps_location() {
        let source = BenchError::invalid_value("expected a base-10 integer, got \"abc\"")
            .with_field("params.n")
            .with_record(0);
        let err = CliError::extract(Path::new("results.json"), source);
        let message = err.to_string();
        assert!(message.starts_with("cannot extract 'results.json': InvalidValueError"));
        assert!(message.contains("at record 0 (params.n)"));
        assert_eq!(err.bench_error().map(|e| e.kind), Some(BenchErrorKind::InvalidValue));
    }
}
