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

use aviation_codes::{Airlines, Airports, Error, Parsed, Scheme, SearchOptions};

const AIRPORTS: &str = include_str!("data/airports.dat");
const AIRLINES: &str = include_str!("data/airlines.dat");

fn airports() -> Airports {
    Airports::from_openflights(AIRPORTS)
}

fn airlines() -> Airlines {
    Airlines::from_openflights(AIRLINES)
}

#[test]
fn airports_are_indexed() {
    let airports = airports();

    assert_eq!(airports.iata().count(), 11);
    assert_eq!(airports.icao().count(), 12);
    assert_eq!(
        airports.errors(),
        &[Error::InvalidRecord {
            line: 13,
            error: openflights::Error::InvalidFieldCount {
                expected: 14,
                actual: 3
            }
        }]
    );
}

#[test]
fn airlines_are_indexed() {
    let airlines = airlines();

    assert_eq!(airlines.iata().count(), 7);
    assert_eq!(airlines.icao().count(), 9);
    assert_eq!(airlines.errors().len(), 1);
}

#[test]
fn parse_lax() {
    let airports = airports();

    match airports.iata().parse("LAX") {
        Parsed::Found(lax) => {
            assert_eq!(lax.city, "Los Angeles");
            assert_eq!(lax.icao, "KLAX");
            assert_eq!(lax.country, "US");
            assert_eq!(lax.timezone, "America/Los_Angeles");
            assert_eq!(lax.elevation, 125.0);
        }
        Parsed::NotFound => panic!("LAX should be found"),
    }
}

#[test]
fn get_by_icao() {
    let airports = airports();
    let airlines = airlines();

    assert_eq!(
        airports.icao().get("KJFK").map(|a| a.iata.as_str()),
        Some("JFK")
    );
    assert!(airlines.iata().is("AA"));
    assert_eq!(
        airlines.icao().get("AAL").map(|a| a.iata.as_str()),
        Some("AA")
    );
}

#[test]
fn country_names_are_normalized() {
    let airports = airports();

    let country = |code| airports.get(code).map(|a| a.country.as_str());
    assert_eq!(country("RGN"), Some("MM"));
    assert_eq!(country("FIH"), Some("CD"));
    assert_eq!(country("LHR"), Some("GB"));
    assert_eq!(country("GKA"), Some("PG"));
    assert_eq!(country("YAM"), Some("CA"));
}

#[test]
fn known_codes_are_found() {
    let airports = airports();

    for scheme in [Scheme::Iata, Scheme::Icao] {
        let lookup = airports.lookup(scheme);

        for code in lookup.codes() {
            assert!(lookup.is(&code), "{code}");
            assert!(airports.is(&code), "{code}");

            let record = lookup.get(&code).expect("known code should have a record");
            assert_eq!(lookup.parse(&code), Parsed::Found(record));
            assert_eq!(airports.get(&code), Some(record));
        }
    }
}

#[test]
fn unknown_codes_are_not_found() {
    let airports = airports();
    let airlines = airlines();

    for code in ["SFO", "KSFO"] {
        assert!(!airports.is(code));
        assert_eq!(airports.get(code), None);
        assert_eq!(airports.parse(code), Parsed::NotFound);
    }

    for code in ["EZ", "EZY"] {
        assert!(!airlines.is(code));
        assert_eq!(airlines.get(code), None);
        assert_eq!(airlines.parse(code), Parsed::NotFound);
    }
}

#[test]
fn lookups_ignore_case() {
    let airports = airports();
    let airlines = airlines();

    for code in ["LAX", "KLAX"] {
        let expected = airports.get(code);
        assert!(expected.is_some());
        assert_eq!(airports.get(&code.to_lowercase()), expected);
        assert_eq!(airports.get(&code[..1].to_lowercase()), None);
    }

    assert_eq!(airlines.get("baw"), airlines.get("BAW"));
    assert_eq!(airlines.get("1t"), airlines.get("1T"));
}

#[test]
fn length_selects_the_scheme() {
    let airports = airports();
    let airlines = airlines();

    // the ICAO code of an airline has the width of an airport IATA code
    assert!(airlines.is("AAL"));
    assert!(!airports.is("AAL"));

    for code in ["", "L", "LA", "KLAXX", "Los Angeles"] {
        assert!(!airports.is(code));
        assert_eq!(airports.get(code), None);
        assert_eq!(airports.parse(code), Parsed::NotFound);
    }

    assert_eq!(airlines.parse("X"), Parsed::NotFound);
    assert_eq!(airlines.parse("AALX"), Parsed::NotFound);
}

#[test]
fn codes_round_trip() {
    let airports = airports();
    let airlines = airlines();

    for arpt in airports.records() {
        if !arpt.icao.is_empty() {
            let by_icao = airports.icao().get(&arpt.icao).expect("ICAO should be indexed");
            assert_eq!(by_icao.iata, arpt.iata);
        }
    }

    for airline in airlines.records() {
        if airline.icao.len() == 3 {
            let by_icao = airlines.icao().get(&airline.icao).expect("ICAO should be indexed");
            assert_eq!(by_icao.iata, airline.iata);
        }
    }
}

#[test]
fn count_is_number_of_codes() {
    let airports = airports();
    let airlines = airlines();

    for scheme in [Scheme::Iata, Scheme::Icao] {
        assert_eq!(airports.lookup(scheme).count(), airports.lookup(scheme).codes().len());
        assert_eq!(airlines.lookup(scheme).count(), airlines.lookup(scheme).codes().len());
    }
}

#[test]
fn codes_without_format_are_kept() {
    let airlines = airlines();

    // the IATA code "-" has the wrong width and isn't indexed
    assert!(!airlines.iata().is("-"));
    assert!(airlines.icao().is("N/A"));
    assert!(!airlines.icao().is_format("N/A"));
    assert_eq!(
        airlines.icao().get("N/A").map(|a| a.name.as_str()),
        Some("Private flight")
    );
}

#[test]
fn records_without_codes_are_discarded() {
    let airports = airports();
    assert!(airports
        .search("koeln", SearchOptions::default())
        .is_empty());
    assert!(!airports.codes().icao().is("EDDK"));
}

#[test]
fn search_los_angeles() {
    let airports = airports();

    let found = airports.search("Los Angeles", SearchOptions::default().with_limit(1));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].iata, "LAX");

    let found = airports.search("los angeles", SearchOptions::default());
    assert_eq!(
        found.iter().map(|a| a.iata.as_str()).collect::<Vec<_>>(),
        vec!["LAX", "WHP"]
    );
}

#[test]
fn search_respects_limit() {
    let airports = airports();

    for limit in [0, 1, 3, 10, 100] {
        let found = airports.search("us", SearchOptions::default().with_limit(limit));
        assert!(found.len() <= limit);
    }

    assert_eq!(airports.search("", SearchOptions::default()).len(), 10);
}

#[test]
fn search_by_code_is_exact() {
    let airports = airports();

    let found = airports.search("kjfk", SearchOptions::default());
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].iata, "JFK");

    assert!(airports.search("kjf", SearchOptions::default()).is_empty());
}

#[test]
fn icao_only_records_are_not_searched() {
    let airports = airports();

    assert!(airports.icao().is("KGPC"));
    assert!(airports
        .search("greencastle", SearchOptions::default())
        .is_empty());
}

#[test]
fn search_active_airlines() {
    let airlines = airlines();

    let all = airlines.search("us", SearchOptions::default());
    assert!(all.iter().any(|a| !a.active));

    let active = airlines.search("us", SearchOptions::default().only_active());
    assert!(!active.is_empty());
    assert!(active.iter().all(|a| a.active));
    assert!(active.iter().all(|a| a.iata != "PA"));
}

#[test]
fn search_by_callsign() {
    let airlines = airlines();

    let found = airlines.search("speedbird", SearchOptions::default());
    assert_eq!(
        found.iter().map(|a| a.icao.as_str()).collect::<Vec<_>>(),
        vec!["BAW"]
    );
}
