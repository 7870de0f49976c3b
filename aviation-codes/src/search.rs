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

//! Substring search over a dataset.

use crate::code::Coded;
use crate::dataset::Dataset;

/// The default maximum number of search results.
pub const DEFAULT_LIMIT: usize = 10;

/// Options of a [search](Dataset::search).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchOptions {
    /// Maximum number of results.
    pub limit: usize,
    /// Skip records which aren't active. Only airlines can be inactive.
    pub active_only: bool,
}

impl SearchOptions {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn only_active(mut self) -> Self {
        self.active_only = true;
        self
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            active_only: false,
        }
    }
}

/// A record which can be found by text.
pub trait Searchable: Coded {
    /// The texts in which a query is searched as substring.
    fn texts(&self) -> [&str; 3];

    fn is_active(&self) -> bool {
        true
    }

    /// Returns `true` if the lowercase query is part of a text or equals a
    /// code.
    fn matches(&self, query: &str) -> bool {
        self.texts()
            .iter()
            .any(|text| text.to_lowercase().contains(query))
            || self.iata().to_lowercase() == query
            || self.icao().to_lowercase() == query
    }
}

impl<T: Searchable> Dataset<T> {
    /// Searches records by name, city or callsign, country code and code.
    ///
    /// The query matches if it is part of the name, the city (airports) or
    /// callsign (airlines), or the country code, or if it equals the IATA or
    /// ICAO code. Case is ignored. Results are in the order of the IATA
    /// index, so records which only have an ICAO code are never found. The
    /// search stops at the first `limit` matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use aviation_codes::{Airports, SearchOptions};
    ///
    /// let airports = Airports::from_openflights(
    ///     r#"3484,"Los Angeles International Airport","Los Angeles","United States","LAX","KLAX",33.94250107,-118.4079971,125,-8,"A","America/Los_Angeles","airport","OurAirports""#,
    /// );
    ///
    /// let found = airports.search("los angeles", SearchOptions::default());
    /// assert_eq!(found.len(), 1);
    /// assert_eq!(found[0].iata, "LAX");
    /// ```
    pub fn search(&self, query: &str, options: SearchOptions) -> Vec<&T> {
        let query = query.to_lowercase();

        self.records()
            .filter(|record| !options.active_only || record.is_active())
            .filter(|record| record.matches(&query))
            .take(options.limit)
            .collect()
    }
}
