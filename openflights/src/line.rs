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

use std::borrow::Cow;

use crate::Field;

/// Splits a line into its fields.
///
/// A double quote toggles between quoted and unquoted text and commas only
/// separate fields outside of quoted text. The quotes are dropped and each
/// field is trimmed. Unbalanced quotes are no error, they just keep the rest
/// of the line quoted. There is no escape for a quote within quoted text.
///
/// # Examples
///
/// ```
/// let fields = openflights::split(r#"1,"Goroka Airport","Goroka",\N"#);
///
/// assert_eq!(fields.len(), 4);
/// assert_eq!(fields[1].as_str(), "Goroka Airport");
/// assert!(fields[3].is_null());
/// ```
pub fn split(line: &str) -> Vec<Field<'_>> {
    let mut fields = Vec::new();
    let mut start = 0;
    let mut quoted = false;
    let mut has_quotes = false;

    // both delimiters are ASCII, so every index is a char boundary
    for (i, byte) in line.bytes().enumerate() {
        match byte {
            b'"' => {
                quoted = !quoted;
                has_quotes = true;
            }
            b',' if !quoted => {
                fields.push(field(&line[start..i], has_quotes));
                start = i + 1;
                has_quotes = false;
            }
            _ => {}
        }
    }

    fields.push(field(&line[start..], has_quotes));
    fields
}

fn field(raw: &str, has_quotes: bool) -> Field<'_> {
    if has_quotes {
        let unquoted: String = raw.chars().filter(|&c| c != '"').collect();
        Field::new(Cow::Owned(unquoted.trim().to_owned()))
    } else {
        Field::new(raw.trim())
    }
}

/// Iterator over the lines of a table.
///
/// Leading and trailing whitespace of the whole table is ignored, so a final
/// line break doesn't produce an empty line. Carriage returns stay part of a
/// line and are removed when its last field is trimmed.
pub struct Lines<'a> {
    inner: std::str::Split<'a, char>,
}

impl<'a> Lines<'a> {
    pub fn new(data: &'a str) -> Self {
        Self {
            inner: data.trim().split('\n'),
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}
