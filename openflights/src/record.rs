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

use crate::{split, Error, Field};

/// An OpenFlights record type.
pub trait Record<'a>: Sized {
    /// The minimum number of fields of a line of this record type.
    const FIELD_COUNT: usize;

    /// Parse this record type from its fields.
    ///
    /// The fields are read by position. Missing trailing fields read as empty.
    fn parse(fields: Fields<'a>) -> Self;

    /// Parse this record type from a line.
    ///
    /// # Errors
    ///
    /// Returns an error if the line has less than
    /// [`FIELD_COUNT`][Record::FIELD_COUNT] fields.
    fn from_line(line: &'a str) -> Result<Self, Error> {
        let fields = split(line);

        if fields.len() >= Self::FIELD_COUNT {
            Ok(Self::parse(Fields::new(fields)))
        } else {
            Err(Error::InvalidFieldCount {
                expected: Self::FIELD_COUNT,
                actual: fields.len(),
            })
        }
    }
}

/// Positional reader over the fields of a line.
pub struct Fields<'a> {
    fields: std::vec::IntoIter<Field<'a>>,
}

impl<'a> Fields<'a> {
    pub fn new(fields: Vec<Field<'a>>) -> Self {
        Self {
            fields: fields.into_iter(),
        }
    }

    /// Reads the next field, and advances the position by one.
    ///
    /// Returns an empty field once all fields are read.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Field<'a> {
        self.fields.next().unwrap_or_default()
    }

    /// Skips `n` fields.
    #[inline]
    pub fn skip(&mut self, n: usize) -> &mut Self {
        if n > 0 {
            self.fields.nth(n - 1);
        }
        self
    }
}
