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

//! Per-scheme code validation and lookup.

use std::collections::HashSet;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::code::{normalize, Coded, Scheme};
use crate::dataset::CodeIndex;

/// The result of parsing a code.
#[derive(PartialEq, Debug)]
pub enum Parsed<'a, T> {
    /// The code is known and belongs to the record.
    Found(&'a T),
    /// The code is unknown or has the wrong length.
    NotFound,
}

impl<'a, T> Parsed<'a, T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns the record if the code was found.
    pub fn found(self) -> Option<&'a T> {
        match self {
            Self::Found(record) => Some(record),
            Self::NotFound => None,
        }
    }
}

impl<T> Clone for Parsed<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Parsed<'_, T> {}

impl<'a, T> From<Option<&'a T>> for Parsed<'a, T> {
    fn from(record: Option<&'a T>) -> Self {
        record.map_or(Self::NotFound, Self::Found)
    }
}

/// Validates codes of one scheme.
pub struct Validator<'a, T> {
    scheme: Scheme,
    codes: &'a HashSet<String>,
    kind: PhantomData<fn() -> T>,
}

impl<'a, T: Coded> Validator<'a, T> {
    pub(crate) fn new(scheme: Scheme, codes: &'a HashSet<String>) -> Self {
        Self {
            scheme,
            codes,
            kind: PhantomData,
        }
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Returns `true` if the code has the format of the scheme, regardless
    /// of whether it's known.
    ///
    /// # Examples
    ///
    /// ```
    /// use aviation_codes::Airlines;
    ///
    /// let airlines = Airlines::default();
    ///
    /// assert!(airlines.codes().iata().is_format("2A"));
    /// assert!(!airlines.codes().icao().is_format("2AB"));
    /// ```
    pub fn is_format(&self, code: &str) -> bool {
        T::format(self.scheme).matches(code)
    }

    /// Returns `true` if the code is known, regardless of the case.
    pub fn is(&self, code: &str) -> bool {
        self.codes.contains(&normalize(code))
    }

    /// Returns all known codes in arbitrary order.
    pub fn codes(&self) -> Vec<String> {
        self.codes.iter().cloned().collect()
    }

    /// Returns the number of known codes.
    pub fn count(&self) -> usize {
        self.codes.len()
    }
}

impl<T> Clone for Validator<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Validator<'_, T> {}

/// Validates codes of one scheme and resolves them to their records.
pub struct Lookup<'a, T> {
    validator: Validator<'a, T>,
    index: &'a CodeIndex<T>,
}

impl<'a, T: Coded> Lookup<'a, T> {
    pub(crate) fn new(validator: Validator<'a, T>, index: &'a CodeIndex<T>) -> Self {
        Self { validator, index }
    }

    pub fn scheme(&self) -> Scheme {
        self.validator.scheme()
    }

    /// See [`Validator::is_format`].
    pub fn is_format(&self, code: &str) -> bool {
        self.validator.is_format(code)
    }

    /// See [`Validator::is`].
    pub fn is(&self, code: &str) -> bool {
        self.validator.is(code)
    }

    /// Returns the record of the code, regardless of the case.
    pub fn get(&self, code: &str) -> Option<&'a T> {
        self.index.get(&normalize(code)).map(Arc::as_ref)
    }

    /// Like [`get`](Self::get), but returns a [`Parsed`] result.
    pub fn parse(&self, code: &str) -> Parsed<'a, T> {
        self.get(code).into()
    }

    /// See [`Validator::codes`].
    pub fn codes(&self) -> Vec<String> {
        self.validator.codes()
    }

    /// See [`Validator::count`].
    pub fn count(&self) -> usize {
        self.validator.count()
    }
}

impl<T> Clone for Lookup<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Lookup<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Airline, Airlines, Airport, Airports};

    fn airports() -> Airports {
        [
            Airport {
                iata: "LAX".to_string(),
                icao: "KLAX".to_string(),
                ..Default::default()
            },
            Airport {
                iata: String::new(),
                icao: "AYPY".to_string(),
                ..Default::default()
            },
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn format_ignores_dataset() {
        let airports = Airports::default();

        assert!(airports.iata().is_format("XYZ"));
        assert!(airports.iata().is_format("xyz"));
        assert!(!airports.iata().is_format("XY1"));
        assert!(airports.icao().is_format("ZZZZ"));
        assert!(!airports.icao().is_format("ZZZ"));
    }

    #[test]
    fn airline_formats() {
        let airlines = Airlines::default();

        assert!(airlines.iata().is_format("U2"));
        assert!(airlines.iata().is_format("9w"));
        assert!(!airlines.iata().is_format("U2X"));
        assert!(airlines.icao().is_format("EZY"));
        assert!(!airlines.icao().is_format("E2Y"));
    }

    #[test]
    fn lookup_ignores_case() {
        let airports = airports();

        for code in ["LAX", "lax", "Lax"] {
            assert!(airports.iata().is(code));
            assert_eq!(airports.iata().get(code).map(|a| a.icao.as_str()), Some("KLAX"));
        }
    }

    #[test]
    fn unknown_codes_are_absent() {
        let airports = airports();

        for code in ["SFO", "", "LAXX", "ä"] {
            assert!(!airports.iata().is(code));
            assert_eq!(airports.iata().get(code), None);
            assert_eq!(airports.iata().parse(code), Parsed::NotFound);
        }
    }

    #[test]
    fn schemes_are_separate() {
        let airports = airports();

        assert!(!airports.iata().is("KLAX"));
        assert!(!airports.icao().is("LAX"));
    }

    #[test]
    fn parse_found() {
        let airports = airports();
        let parsed = airports.icao().parse("aypy");

        assert!(parsed.is_found());
        assert_eq!(parsed.found().map(|a| a.icao.as_str()), Some("AYPY"));
    }

    #[test]
    fn count_matches_codes() {
        let airports = airports();

        for scheme in [Scheme::Iata, Scheme::Icao] {
            let lookup = airports.lookup(scheme);
            assert_eq!(lookup.count(), lookup.codes().len());
        }

        assert_eq!(airports.icao().count(), 2);
    }

    #[test]
    fn parsed_from_option() {
        let airline = Airline::default();

        assert_eq!(Parsed::from(Some(&airline)), Parsed::Found(&airline));
        assert_eq!(Parsed::<Airline>::from(None), Parsed::NotFound);
    }
}
