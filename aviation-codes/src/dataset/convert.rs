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

use log::{debug, warn};
use openflights::{Lines, Record};

use super::{Dataset, DatasetBuilder};
use crate::code::Coded;
use crate::country;
use crate::error::Error;

/// A record kind which is read from an OpenFlights table.
pub trait FromOpenFlights: Coded + Sized {
    /// The raw record of one table line.
    type Record<'a>: openflights::Record<'a> + Into<Self>;
}

impl<T: FromOpenFlights> Dataset<T> {
    /// Creates a dataset from an OpenFlights table, e.g. the content of
    /// `airports.dat`.
    ///
    /// Blank lines are ignored. Lines with too few fields are skipped and
    /// kept as [errors](Dataset::errors).
    pub fn from_openflights(data: &str) -> Self {
        for diverging in country::diverging_overrides() {
            warn!(
                "country override {} -> {} contradicts ISO name lookup -> {}",
                diverging.name, diverging.override_code, diverging.resolved_code
            );
        }

        let mut builder = DatasetBuilder::new();

        for (i, line) in Lines::new(data).enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            match <T::Record<'_> as Record<'_>>::from_line(line) {
                Ok(record) => builder.add(record.into()),
                Err(error) => {
                    debug!("skipping {} line {}: {error}", T::KIND, i + 1);
                    builder.add_error(Error::InvalidRecord { line: i + 1, error });
                }
            }
        }

        builder.build()
    }
}
