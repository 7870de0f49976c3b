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

//! The process-wide database.
//!
//! Applications which load the codes once at startup can install them here
//! instead of passing the datasets around. The database can be installed
//! only once and is read-only afterwards.
//!
//! ```
//! use aviation_codes::global::{self, Database};
//!
//! let db = Database::from_openflights(
//!     r#"3484,"Los Angeles International Airport","Los Angeles","United States","LAX","KLAX",33.94250107,-118.4079971,125,-8,"A","America/Los_Angeles","airport","OurAirports""#,
//!     r#"24,"American Airlines",\N,"AA","AAL","AMERICAN","United States","Y""#,
//! );
//!
//! assert!(global::install(db).is_ok());
//! assert!(global::install(Database::default()).is_err());
//!
//! let db = global::database().expect("database should be installed");
//! assert!(db.airports.is("KLAX"));
//! assert!(db.airlines.is("AAL"));
//! ```

use once_cell::sync::OnceCell;

use crate::dataset::{Airlines, Airports};

static DATABASE: OnceCell<Database> = OnceCell::new();

/// Airports and airlines.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Database {
    pub airports: Airports,
    pub airlines: Airlines,
}

impl Database {
    /// Creates the database from the OpenFlights airport and airline tables.
    pub fn from_openflights(airports: &str, airlines: &str) -> Self {
        Self {
            airports: Airports::from_openflights(airports),
            airlines: Airlines::from_openflights(airlines),
        }
    }
}

/// Installs the process-wide database.
///
/// # Errors
///
/// Returns the database back if one is already installed.
#[allow(clippy::result_large_err)]
pub fn install(db: Database) -> Result<(), Database> {
    DATABASE.set(db)
}

/// Returns the process-wide database if it's installed.
pub fn database() -> Option<&'static Database> {
    DATABASE.get()
}
