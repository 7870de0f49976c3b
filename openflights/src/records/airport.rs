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

use crate::{Field, Fields, Record};

/// A line of `airports.dat`.
#[derive(Clone, PartialEq, Debug)]
pub struct Airport<'a> {
    /// OpenFlights identifier of the airport.
    pub id: Field<'a>,
    pub name: Field<'a>,
    /// Main city served by the airport.
    pub city: Field<'a>,
    /// Country or territory name as used by OpenFlights.
    pub country: Field<'a>,
    /// 3-letter IATA code or empty if not assigned.
    pub iata: Field<'a>,
    /// 4-letter ICAO code or empty if not assigned.
    pub icao: Field<'a>,
    /// Decimal degrees, negative is south.
    pub latitude: Field<'a>,
    /// Decimal degrees, negative is west.
    pub longitude: Field<'a>,
    /// Altitude in feet.
    pub altitude: Field<'a>,
    /// Hours offset from UTC.
    pub utc_offset: Field<'a>,
    /// Daylight savings time rule, one of E, A, S, O, Z, N or U.
    pub dst: Field<'a>,
    /// Timezone in tz (Olson) format, e.g. "America/Los_Angeles".
    pub tz_database: Field<'a>,
    /// Type of the location, e.g. "airport", "station" or "port".
    pub kind: Field<'a>,
    /// Source of the data, e.g. "OurAirports".
    pub source: Field<'a>,
}

impl<'a> Record<'a> for Airport<'a> {
    const FIELD_COUNT: usize = 14;

    fn parse(mut fields: Fields<'a>) -> Self {
        Self {
            id: fields.next(),
            name: fields.next(),
            city: fields.next(),
            country: fields.next(),
            iata: fields.next(),
            icao: fields.next(),
            latitude: fields.next(),
            longitude: fields.next(),
            altitude: fields.next(),
            utc_offset: fields.next(),
            dst: fields.next(),
            tz_database: fields.next(),
            kind: fields.next(),
            source: fields.next(),
        }
    }
}

record_try_from!(Airport);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const AIRPORT: &str = r#"3797,"John F Kennedy International Airport","New York","United States","JFK","KJFK",40.63980103,-73.77890015,13,-5,"A","America/New_York","airport","OurAirports""#;

    #[test]
    fn airport_record() {
        let arpt = Airport::try_from(AIRPORT).expect("airport should parse");

        assert_eq!(arpt.id, "3797");
        assert_eq!(arpt.name, "John F Kennedy International Airport");
        assert_eq!(arpt.city, "New York");
        assert_eq!(arpt.country, "United States");
        assert_eq!(arpt.iata, "JFK");
        assert_eq!(arpt.icao, "KJFK");
        assert_eq!(arpt.latitude.as_f64_lenient(), 40.63980103);
        assert_eq!(arpt.longitude.as_f64_lenient(), -73.77890015);
        assert_eq!(arpt.altitude.as_f64_lenient(), 13.0);
        assert_eq!(arpt.utc_offset, "-5");
        assert_eq!(arpt.dst, "A");
        assert_eq!(arpt.tz_database, "America/New_York");
        assert_eq!(arpt.kind, "airport");
        assert_eq!(arpt.source, "OurAirports");
    }

    #[test]
    fn missing_codes_are_null() {
        let line = r#"5,"Port Moresby Jacksons International Airport","Port Moresby","Papua New Guinea",\N,"AYPY",-9.44338035583496,147.220001220703,146,10,"U","Pacific/Port_Moresby","airport","OurAirports""#;
        let arpt = Airport::try_from(line).expect("airport should parse");

        assert!(arpt.iata.is_null());
        assert_eq!(arpt.icao, "AYPY");
    }

    #[test]
    fn too_few_fields() {
        assert_eq!(
            Airport::try_from(r#"1,"Goroka Airport","Goroka""#),
            Err(Error::InvalidFieldCount {
                expected: 14,
                actual: 3
            })
        );
    }

    #[test]
    fn additional_fields_are_ignored() {
        let line = format!("{AIRPORT},extra");
        let arpt = Airport::try_from(line.as_str()).expect("airport should parse");
        assert_eq!(arpt.source, "OurAirports");
    }
}
