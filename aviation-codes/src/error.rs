// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// A line of the source table couldn't be read as record. The line number
    /// starts at 1.
    InvalidRecord {
        line: usize,
        error: openflights::Error,
    },
    /// The source couldn't be fetched.
    Fetch { url: String, reason: String },
    /// The source answered with a non-success status.
    Status { url: String, status: u16 },
    Io(String),
    Json(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRecord { line, error } => write!(f, "line {line}: {error}"),
            Self::Fetch { url, reason } => write!(f, "failed to fetch {url}: {reason}"),
            Self::Status { url, status } => {
                write!(f, "failed to fetch {url}: status {status}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
