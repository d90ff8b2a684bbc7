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

//! Error types shared by the extraction, table and chart pipelines.

use std::fmt;
use std::io;
use thiserror::Error;

/// The kind of error that aborted a pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchErrorKind {
    /// Structurally wrong input (top-level shape, table header, row width).
    Format,
    /// A required field is absent.
    MissingField,
    /// A field is present but does not coerce to its expected type.
    InvalidValue,
    /// A well-formed query selected nothing to act on.
    EmptyResult,
    /// Source or destination unavailable.
    Io,
    /// The drawing backend failed to produce the image.
    Render,
}

impl fmt::Display for BenchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format => write!(f, "FormatError"),
            Self::MissingField => write!(f, "MissingFieldError"),
            Self::InvalidValue => write!(f, "InvalidValueError"),
            Self::EmptyResult => write!(f, "EmptyResultError"),
            Self::Io => write!(f, "IOError"),
            Self::Render => write!(f, "RenderError"),
        }
    }
}

/// An error raised by any jmhplot pipeline stage.
///
/// Every error is terminal for the operation that raised it. The optional
/// `record` and `field` locate the offending input: `record` is the 0-based
/// index of the JSON record or table row, `field` the dotted field path
/// (e.g. `params.n`) or table column name.
///
/// # Examples
///
/// ```
/// use jmhplot_core::{BenchError, BenchErrorKind};
///
/// let err = BenchError::invalid_value("expected a base-10 integer, got \"abc\"")
///     .with_record(3)
///     .with_field("params.n");
///
/// assert_eq!(err.kind, BenchErrorKind::InvalidValue);
/// assert_eq!(
///     err.to_string(),
///     "InvalidValueError at record 3 (params.n): expected a base-10 integer, got \"abc\""
/// );
/// ```
#[derive(Debug, Clone, Error)]
#[error("{kind}{}: {message}", location(.record, .field))]
pub struct BenchError {
    /// The kind of error.
    pub kind: BenchErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Dotted path or column name of the offending field.
    pub field: Option<String>,
    /// 0-based index of the offending record.
    pub record: Option<usize>,
}

fn location(record: &Option<usize>, field: &Option<String>) -> String {
    match (record, field) {
        (Some(record), Some(field)) => format!(" at record {} ({})", record, field),
        (Some(record), None) => format!(" at record {}", record),
        (None, Some(field)) => format!(" ({})", field),
        (None, None) => String::new(),
    }
}

impl BenchError {
    /// Create a new error.
    pub fn new(kind: BenchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field: None,
            record: None,
        }
    }

    /// Attach the field path.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Attach the record index.
    pub fn with_record(mut self, record: usize) -> Self {
        self.record = Some(record);
        self
    }

    pub fn format(message: impl Into<String>) -> Self {
        Self::new(BenchErrorKind::Format, message)
    }

    /// A missing-field error; the message is derived from the field path.
    pub fn missing_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::new(
            BenchErrorKind::MissingField,
            format!("required field `{}` is absent", field),
        )
        .with_field(field)
    }

    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::new(BenchErrorKind::InvalidValue, message)
    }

    pub fn empty_result(message: impl Into<String>) -> Self {
        Self::new(BenchErrorKind::EmptyResult, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(BenchErrorKind::Io, message)
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::new(BenchErrorKind::Render, message)
    }
}

impl From<io::Error> for BenchError {
    fn from(err: io::Error) -> Self {
        Self::io(err.to_string())
    }
}

/// Result type for jmhplot operations.
pub type Result<T> = std::result::Result<T, BenchError>;
