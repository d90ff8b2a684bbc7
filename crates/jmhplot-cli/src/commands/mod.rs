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

//! CLI command implementations

mod extract;
mod plot;

pub use extract::extract;
pub use plot::plot;

use crate::error::CliError;
use std::fs;
use std::path::Path;

/// Default maximum input file size (1 GB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Read a file from disk with size validation.
///
/// Files larger than `max_size` are rejected before any memory is allocated
/// for their contents.
///
/// # Errors
///
/// Returns `Err` if:
/// - The file metadata cannot be accessed
/// - The file size exceeds `max_size`
/// - The file cannot be read or is not UTF-8
pub fn read_file(path: &Path, max_size: u64) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    if metadata.len() > max_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write `content` to `path`, creating missing parent directories and
/// replacing any existing file.
pub fn write_output(path: &Path, content: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CliError::io_error(parent, e))?;
    }
    fs::write(path, content).map_err(|e| CliError::io_error(path, e))
}
