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

/// An airport identified by IATA and/or ICAO code.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Airport {
    /// 3-letter IATA code or empty.
    pub iata: String,
    /// 4-letter ICAO code or empty.
    pub icao: String,
    pub name: String,
    /// Main city served by the airport.
    pub city: String,
    /// ISO 3166-1 alpha-2 country code or empty if the country is unknown.
    pub country: String,
    /// Decimal degrees, negative is south.
    pub latitude: f64,
    /// Decimal degrees, negative is west.
    pub longitude: f64,
    /// Elevation in feet above mean sea level.
    pub elevation: f64,
    /// IANA timezone identifier or empty.
    pub timezone: String,
}

impl<'a> From<openflights::records::Airport<'a>> for Airport {
    fn from(record: openflights::records::Airport<'a>) -> Self {
        Self {
            country: country::alpha2(record.country.as_str()).to_string(),
            latitude: record.latitude.as_f64_lenient(),
            longitude: record.longitude.as_f64_lenient(),
            elevation: record.altitude.as_f64_lenient(),
            iata: record.iata.into(),
            icao: record.icao.into(),
            name: record.name.into(),
            city: record.city.into(),
            timezone: record.tz_database.into(),
        }
    }
}

impl FromOpenFlights for Airport {
    type Record<'a> = openflights::records::Airport<'a>;
}

impl Coded for Airport {
    const KIND: &'static str = "airport";
    const IATA: CodeFormat = CodeFormat::Letters(3);
    const ICAO: CodeFormat = CodeFormat::Letters(4);

    fn iata(&self) -> &str {
        &self.iata
    }

    fn icao(&self) -> &str {
        &self.icao
    }
}

impl Searchable for Airport {
    fn texts(&self) -> [&str; 3] {
        [&self.name, &self.city, &self.country]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn airport_from_record() {
        let record = openflights::records::Airport::try_from(
            r#"3484,"Los Angeles International Airport","Los Angeles","United States","LAX","KLAX",33.94250107,-118.4079971,125,-8,"A","America/Los_Angeles","airport","OurAirports""#,
        )
        .expect("airport should parse");

        assert_eq!(
            Airport::from(record),
            Airport {
                iata: "LAX".to_string(),
                icao: "KLAX".to_string(),
                name: "Los Angeles International Airport".to_string(),
                city: "Los Angeles".to_string(),
                country: "US".to_string(),
                latitude: 33.94250107,
                longitude: -118.4079971,
                elevation: 125.0,
                timezone: "America/Los_Angeles".to_string(),
            }
        );
    }

    #[test]
    fn unparsable_numbers_are_zero() {
        let record = openflights::records::Airport::try_from(
            r#"1,"Nowhere",\N,"Atlantis",\N,"XXXX",north,,\N,\N,\N,\N,\N,\N"#,
        )
        .expect("airport should parse");
        let arpt = Airport::from(record);

        assert_eq!(arpt.latitude, 0.0);
        assert_eq!(arpt.longitude, 0.0);
        assert_eq!(arpt.elevation, 0.0);
        assert_eq!(arpt.country, "");
        assert_eq!(arpt.city, "");
        assert_eq!(arpt.timezone, "");
    }
}
