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

//! OpenFlights data parser.
//!
//! This crate parses the lines of the OpenFlights `airports.dat` and
//! `airlines.dat` tables into [records] with their [fields]. A line is a comma
//! separated list of values where values may be enclosed in double quotes and
//! `\N` marks a missing value. Fields reference the line whenever possible and
//! only allocate if quotes have to be removed.
//!
//! # Examples
//!
//! Lets parse Los Angeles International and print its codes:
//!
//! ```
//! use openflights::records::Airport;
//!
//! # fn main() -> Result<(), openflights::Error> {
//! let line = r#"3484,"Los Angeles International Airport","Los Angeles","United States","LAX","KLAX",33.94250107,-118.4079971,125,-8,"A","America/Los_Angeles","airport","OurAirports""#;
//! let airport = Airport::try_from(line)?;
//!
//! let iata = airport.iata.as_str();
//! let lat = airport.latitude.as_f64_lenient();
//! let lon = airport.longitude.as_f64_lenient();
//! println!("{iata} at {lat:.4}, {lon:.4}"); // => "LAX at 33.9425, -118.4080"
//! #     Ok(())
//! # }
//! ```
//!
//! A whole table is read line by line with the [`Lines`] iterator. Lines with
//! too few fields are reported as error and can be skipped:
//!
//! ```
//! # use openflights::records::Airline;
//! # use openflights::Lines;
//! let data = "24,\"American Airlines\",\\N,\"AA\",\"AAL\",\"AMERICAN\",\"United States\",\"Y\"\n\
//!             -1,\"Unknown\"\n";
//!
//! let airlines: Vec<_> = Lines::new(data)
//!     .filter_map(|line| Airline::try_from(line).ok())
//!     .collect();
//!
//! assert_eq!(airlines.len(), 1);
//! assert_eq!(airlines[0].icao.as_str(), "AAL");
//! ```
//!
//! [records]: crate::records
//! [fields]: crate::Field

#[macro_use]
mod macros;

mod error;
mod field;
mod line;
mod record;

pub mod records;

pub use error::Error;
pub use field::Field;
pub use line::{split, Lines};
pub use record::{Fields, Record};
