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

//! Offline validation and lookup of airport and airline codes.
//!
//! Airports and airlines are identified by IATA and ICAO codes. This crate
//! builds [datasets](Dataset) of both record kinds from the OpenFlights
//! tables and answers whether a code is known, which record it belongs to
//! and which records match a text query. All queries are answered from
//! memory and never fail: an unknown code is simply absent.
//!
//! Each dataset has a [`Lookup`] per scheme to validate and resolve codes of
//! that scheme. On the dataset itself, the scheme is detected by the length
//! of the code. If only validation is needed, the [`Codes`] of a dataset can
//! be kept without the records.
//!
//! # Examples
//!
//! ```
//! use aviation_codes::{Airports, Parsed, SearchOptions};
//!
//! let airports = Airports::from_openflights(concat!(
//!     r#"3484,"Los Angeles International Airport","Los Angeles","United States","LAX","KLAX",33.94250107,-118.4079971,125,-8,"A","America/Los_Angeles","airport","OurAirports""#,
//!     "\n",
//!     r#"3797,"John F Kennedy International Airport","New York","United States","JFK","KJFK",40.63980103,-73.77890015,13,-5,"A","America/New_York","airport","OurAirports""#,
//! ));
//!
//! // IATA codes of airports have 3 letters
//! assert!(airports.iata().is_format("XYZ"));
//! assert!(!airports.iata().is("XYZ"));
//!
//! match airports.iata().parse("lax") {
//!     Parsed::Found(lax) => assert_eq!(lax.icao, "KLAX"),
//!     Parsed::NotFound => unreachable!(),
//! }
//!
//! // the scheme is detected by the length
//! assert_eq!(airports.get("KJFK").map(|a| a.iata.as_str()), Some("JFK"));
//!
//! let found = airports.search("new york", SearchOptions::default().with_limit(5));
//! assert_eq!(found.len(), 1);
//! ```
//!
//! # Features
//!
//! - `serde`: (De)serialization of records, code sets and datasets as JSON
//!   artifacts.
//! - `fetch`: The `aviation-codes-build` binary, which downloads the
//!   OpenFlights tables and writes the artifacts.

mod airline;
mod airport;
#[cfg(feature = "serde")]
mod artifact;
mod code;
pub mod country;
mod dataset;
mod error;
pub mod global;
mod lookup;
mod search;

pub use airline::Airline;
pub use airport::Airport;
pub use code::{CodeFormat, Coded, Scheme};
pub use dataset::{
    AirlineCodes, Airlines, AirportCodes, Airports, Codes, Dataset, DatasetBuilder,
    FromOpenFlights,
};
pub use error::Error;
pub use lookup::{Lookup, Parsed, Validator};
pub use search::{SearchOptions, Searchable, DEFAULT_LIMIT};

pub mod prelude {
    pub use crate::{
        Airline, AirlineCodes, Airlines, Airport, AirportCodes, Airports, Coded, Parsed, Scheme,
        SearchOptions,
    };
}
