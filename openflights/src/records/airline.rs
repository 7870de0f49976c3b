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

/// A line of `airlines.dat`.
#[derive(Clone, PartialEq, Debug)]
pub struct Airline<'a> {
    /// OpenFlights identifier of the airline.
    pub id: Field<'a>,
    pub name: Field<'a>,
    pub alias: Field<'a>,
    /// 2-letter IATA code or empty if not assigned.
    pub iata: Field<'a>,
    /// 3-letter ICAO code or empty if not assigned.
    pub icao: Field<'a>,
    /// Airline callsign.
    pub callsign: Field<'a>,
    /// Country or territory name as used by OpenFlights.
    pub country: Field<'a>,
    /// "Y" if the airline is or has until recently been operational.
    pub active: Field<'a>,
}

impl<'a> Record<'a> for Airline<'a> {
    const FIELD_COUNT: usize = 8;

    fn parse(mut fields: Fields<'a>) -> Self {
        Self {
            id: fields.next(),
            name: fields.next(),
            alias: fields.next(),
            iata: fields.next(),
            icao: fields.next(),
            callsign: fields.next(),
            country: fields.next(),
            active: fields.next(),
        }
    }
}

record_try_from!(Airline);
