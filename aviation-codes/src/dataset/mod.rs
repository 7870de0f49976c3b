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

//! Airport and airline datasets.

use std::collections::HashSet;
use std::marker::PhantomData;

use crate::code::{Coded, Scheme};
use crate::error::Error;
use crate::lookup::{Lookup, Parsed, Validator};
use crate::{Airline, Airport};

mod builder;
mod convert;
mod index;

pub use builder::DatasetBuilder;
pub use convert::FromOpenFlights;
pub(crate) use index::CodeIndex;

/// All airports with their codes.
pub type Airports = Dataset<Airport>;

/// All airlines with their codes.
pub type Airlines = Dataset<Airline>;

/// The valid airport codes without airport data.
pub type AirportCodes = Codes<Airport>;

/// The valid airline codes without airline data.
pub type AirlineCodes = Codes<Airline>;

/// The valid IATA and ICAO codes of one record kind.
///
/// This is the validation-only view of a [`Dataset`]. It answers whether a
/// code exists but can't tell to which record it belongs.
///
/// # Examples
///
/// ```
/// use aviation_codes::{AirportCodes, Airports};
///
/// let airports = Airports::from_openflights(
///     r#"3484,"Los Angeles International Airport","Los Angeles","United States","LAX","KLAX",33.94250107,-118.4079971,125,-8,"A","America/Los_Angeles","airport","OurAirports""#,
/// );
/// let codes: AirportCodes = airports.codes().clone();
///
/// assert!(codes.is("lax"));
/// assert!(codes.icao().is("KLAX"));
/// assert!(codes.icao().is_format("EGLL"));
/// assert!(!codes.icao().is("EGLL"));
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct Codes<T> {
    pub(crate) iata: HashSet<String>,
    pub(crate) icao: HashSet<String>,
    pub(crate) kind: PhantomData<fn() -> T>,
}

impl<T: Coded> Codes<T> {
    /// Returns the validator of the scheme.
    pub fn validator(&self, scheme: Scheme) -> Validator<'_, T> {
        match scheme {
            Scheme::Iata => Validator::new(scheme, &self.iata),
            Scheme::Icao => Validator::new(scheme, &self.icao),
        }
    }

    /// Returns the IATA code validator.
    pub fn iata(&self) -> Validator<'_, T> {
        self.validator(Scheme::Iata)
    }

    /// Returns the ICAO code validator.
    pub fn icao(&self) -> Validator<'_, T> {
        self.validator(Scheme::Icao)
    }

    /// Returns `true` if the code is a known IATA or ICAO code.
    ///
    /// The scheme is [detected](Scheme::detect) by the length of the code.
    /// Codes of any other length are never known.
    pub fn is(&self, code: &str) -> bool {
        Scheme::detect::<T>(code).is_some_and(|scheme| self.validator(scheme).is(code))
    }
}

impl<T> Default for Codes<T> {
    fn default() -> Self {
        Self {
            iata: HashSet::new(),
            icao: HashSet::new(),
            kind: PhantomData,
        }
    }
}

/// Records of one kind indexed by their IATA and ICAO code.
///
/// A dataset is built once, either from the OpenFlights table or with a
/// [`DatasetBuilder`], and is read-only afterwards. Lookups never fail:
/// unknown codes are reported as absent.
///
/// # Examples
///
/// ```
/// use aviation_codes::{Airlines, Parsed};
///
/// let airlines = Airlines::from_openflights(
///     r#"24,"American Airlines",\N,"AA","AAL","AMERICAN","United States","Y""#,
/// );
///
/// assert!(airlines.iata().is("aa"));
/// assert_eq!(airlines.icao().get("AAL").map(|a| a.iata.as_str()), Some("AA"));
/// assert_eq!(airlines.parse("X"), Parsed::NotFound);
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct Dataset<T> {
    pub(crate) codes: Codes<T>,
    pub(crate) by_iata: CodeIndex<T>,
    pub(crate) by_icao: CodeIndex<T>,
    pub(crate) errors: Vec<Error>,
}

impl<T: Coded> Dataset<T> {
    pub fn builder() -> DatasetBuilder<T> {
        DatasetBuilder::new()
    }

    /// Returns the lookup of the scheme.
    pub fn lookup(&self, scheme: Scheme) -> Lookup<'_, T> {
        match scheme {
            Scheme::Iata => Lookup::new(self.codes.iata(), &self.by_iata),
            Scheme::Icao => Lookup::new(self.codes.icao(), &self.by_icao),
        }
    }

    /// Returns the IATA code lookup.
    pub fn iata(&self) -> Lookup<'_, T> {
        self.lookup(Scheme::Iata)
    }

    /// Returns the ICAO code lookup.
    pub fn icao(&self) -> Lookup<'_, T> {
        self.lookup(Scheme::Icao)
    }

    /// Returns `true` if the code is a known IATA or ICAO code.
    ///
    /// The scheme is [detected](Scheme::detect) by the length of the code.
    pub fn is(&self, code: &str) -> bool {
        self.codes.is(code)
    }

    /// Returns the record of an IATA or ICAO code.
    ///
    /// The scheme is [detected](Scheme::detect) by the length of the code.
    /// Codes of any other length return `None` without lookup.
    pub fn get(&self, code: &str) -> Option<&T> {
        Scheme::detect::<T>(code).and_then(|scheme| self.lookup(scheme).get(code))
    }

    /// Like [`get`](Self::get), but returns a [`Parsed`] result.
    pub fn parse(&self, code: &str) -> Parsed<'_, T> {
        self.get(code).into()
    }
}

impl<T> Dataset<T> {
    /// The valid codes of this dataset.
    pub fn codes(&self) -> &Codes<T> {
        &self.codes
    }

    /// Splits off the valid codes, dropping the records.
    pub fn into_codes(self) -> Codes<T> {
        self.codes
    }

    /// Lines of the source which couldn't be read.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Returns the records in the order of their IATA codes' first
    /// occurrence.
    ///
    /// Records indexed only by ICAO code are not included.
    pub fn records(&self) -> impl Iterator<Item = &T> + '_ {
        self.by_iata.records()
    }
}

impl<T> Default for Dataset<T> {
    fn default() -> Self {
        Self {
            codes: Codes::default(),
            by_iata: CodeIndex::default(),
            by_icao: CodeIndex::default(),
            errors: Vec::new(),
        }
    }
}
