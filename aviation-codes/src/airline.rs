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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::code::{CodeFormat, Coded};
use crate::country;
use crate::dataset::FromOpenFlights;
use crate::search::Searchable;

/// An airline identified by IATA and/or ICAO code.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Airline {
    /// 2-character IATA code or empty.
    pub iata: String,
    /// 3-letter ICAO code or empty.
    pub icao: String,
    pub name: String,
    pub callsign: String,
    /// ISO 3166-1 alpha-2 country code or empty if the country is unknown.
    pub country: String,
    pub active: bool,
}

impl<'a> From<openflights::records::Airline<'a>> for Airline {
    fn from(record: openflights::records::Airline<'a>) -> Self {
        Self {
            country: country::alpha2(record.country.as_str()).to_string(),
            active: record.active.is_yes(),
            iata: record.iata.into(),
            icao: record.icao.into(),
            name: record.name.into(),
            callsign: record.callsign.into(),
        }
    }
}

impl FromOpenFlights for Airline {
    type Record<'a> = openflights::records::Airline<'a>;
}

impl Coded for Airline {
    const KIND: &'static str = "airline";
    const IATA: CodeFormat = CodeFormat::Alphanumeric(2);
    const ICAO: CodeFormat = CodeFormat::Letters(3);

    fn iata(&self) -> &str {
        &self.iata
    }

    fn icao(&self) -> &str {
        &self.icao
    }
}

impl Searchable for Airline {
    fn texts(&self) -> [&str; 3] {
        [&self.name, &self.callsign, &self.country]
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
