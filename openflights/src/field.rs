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
use std::fmt;

/// The token OpenFlights uses for a missing value.
pub const NULL: &str = "\\N";

/// A single value of an OpenFlights line.
///
/// Missing values (`\N`) and empty values are both represented as an empty
/// field. The field borrows from the line unless quotes had to be removed.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Field<'a>(Cow<'a, str>);

impl<'a> Field<'a> {
    /// Creates a field from an already unquoted and trimmed value.
    ///
    /// The value is normalized: `\N` and empty values become an empty field,
    /// otherwise one leading and one trailing double quote are removed.
    pub fn new(value: impl Into<Cow<'a, str>>) -> Self {
        let value = value.into();

        if value == NULL || value.is_empty() {
            return Self::default();
        }

        if !value.starts_with('"') && !value.ends_with('"') {
            return Self(value);
        }

        match value {
            Cow::Borrowed(s) => Self(Cow::Borrowed(unquote(s))),
            Cow::Owned(s) => Self(Cow::Owned(unquote(&s).to_owned())),
        }
    }

    /// Returns the field's value.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the value is missing.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of characters of the value.
    #[inline]
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns `true` if the value is exactly `Y`.
    ///
    /// Any other value including `y`, `N` or a missing value is `false`.
    #[inline]
    pub fn is_yes(&self) -> bool {
        self.0 == "Y"
    }

    /// Returns the value as number or `0.0` if it isn't one.
    ///
    /// The longest numeric prefix of the value is parsed, so `"12ft"` is
    /// `12.0`. Values without numeric prefix, `NaN` and negative zero are
    /// returned as `0.0`, so a broken coordinate or altitude never drops
    /// the record.
    pub fn as_f64_lenient(&self) -> f64 {
        let s = self.0.trim_start();

        let value = match infinity_prefix(s) {
            Some(inf) => inf,
            None => s[..numeric_prefix_len(s)].parse::<f64>().unwrap_or(0.0),
        };

        if value.is_nan() || value == 0.0 {
            0.0
        } else {
            value
        }
    }

    /// Converts the field into an owned string.
    pub fn into_owned(self) -> String {
        self.0.into_owned()
    }
}

fn unquote(s: &str) -> &str {
    let s = s.strip_prefix('"').unwrap_or(s);
    s.strip_suffix('"').unwrap_or(s)
}

fn infinity_prefix(s: &str) -> Option<f64> {
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };

    rest.starts_with("Infinity")
        .then_some(sign * f64::INFINITY)
}

/// Length of the longest prefix in decimal notation with optional sign,
/// fraction and exponent.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = digits(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }

        let exp_digits = digits(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    end
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_str())
    }
}

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Field<'_>> for String {
    fn from(field: Field<'_>) -> Self {
        field.into_owned()
    }
}

impl PartialEq<str> for Field<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Field<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_and_empty_are_missing() {
        assert!(Field::new("\\N").is_null());
        assert!(Field::new("").is_null());
        assert!(!Field::new("N").is_null());
    }

    #[test]
    fn outer_quotes_are_removed() {
        assert_eq!(Field::new("\"LAX\""), "LAX");
        assert_eq!(Field::new("\"LAX"), "LAX");
        assert_eq!(Field::new(String::from("LAX\"")), "LAX");
        assert_eq!(Field::new("L\"AX"), "L\"AX");
    }

    #[test]
    fn only_uppercase_y_is_yes() {
        assert!(Field::new("Y").is_yes());
        assert!(!Field::new("y").is_yes());
        assert!(!Field::new("N").is_yes());
        assert!(!Field::new("\\N").is_yes());
    }

    #[test]
    fn lenient_numbers() {
        assert_eq!(Field::new("33.94250107").as_f64_lenient(), 33.94250107);
        assert_eq!(Field::new("-118.4079971").as_f64_lenient(), -118.4079971);
        assert_eq!(Field::new("125").as_f64_lenient(), 125.0);
        assert_eq!(Field::new(" 12ft").as_f64_lenient(), 12.0);
        assert_eq!(Field::new(".5").as_f64_lenient(), 0.5);
        assert_eq!(Field::new("5.").as_f64_lenient(), 5.0);
        assert_eq!(Field::new("1e3").as_f64_lenient(), 1000.0);
        assert_eq!(Field::new("1e").as_f64_lenient(), 1.0);
        assert_eq!(Field::new("-Infinity").as_f64_lenient(), f64::NEG_INFINITY);
    }

    #[test]
    fn broken_numbers_are_zero() {
        assert_eq!(Field::new("").as_f64_lenient(), 0.0);
        assert_eq!(Field::new("\\N").as_f64_lenient(), 0.0);
        assert_eq!(Field::new("abc").as_f64_lenient(), 0.0);
        assert_eq!(Field::new("-").as_f64_lenient(), 0.0);
        assert_eq!(Field::new(".").as_f64_lenient(), 0.0);
        assert_eq!(Field::new("NaN").as_f64_lenient(), 0.0);
        assert!(Field::new("-0").as_f64_lenient().is_sign_positive());
    }
}
