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

//! JSON artifacts of code sets and datasets.
//!
//! A [`Codes`] value is written as its two sorted code lists:
//!
//! ```json
//! { "iata": ["JFK", "LAX"], "icao": ["KJFK", "KLAX"] }
//! ```
//!
//! A [`Dataset`] adds both indexes in build order as `[code, record]` pairs
//! under `by_iata` and `by_icao`.

use std::collections::HashSet;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

use crate::code::Coded;
use crate::dataset::{CodeIndex, Codes, Dataset};
use crate::error::Error;

fn sorted(codes: &HashSet<String>) -> Vec<&str> {
    let mut codes: Vec<&str> = codes.iter().map(String::as_str).collect();
    codes.sort_unstable();
    codes
}

impl<T> Serialize for Codes<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Codes", 2)?;
        state.serialize_field("iata", &sorted(&self.iata))?;
        state.serialize_field("icao", &sorted(&self.icao))?;
        state.end()
    }
}

#[derive(Deserialize)]
struct CodesArtifact {
    iata: HashSet<String>,
    icao: HashSet<String>,
}

impl<'de, T> Deserialize<'de> for Codes<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let CodesArtifact { iata, icao } = CodesArtifact::deserialize(deserializer)?;

        Ok(Self {
            iata,
            icao,
            kind: PhantomData,
        })
    }
}

impl<T: Serialize> Serialize for Dataset<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let by_iata: Vec<_> = self.by_iata.iter().collect();
        let by_icao: Vec<_> = self.by_icao.iter().collect();

        let mut state = serializer.serialize_struct("Dataset", 4)?;
        state.serialize_field("iata", &sorted(&self.codes.iata))?;
        state.serialize_field("icao", &sorted(&self.codes.icao))?;
        state.serialize_field("by_iata", &by_iata)?;
        state.serialize_field("by_icao", &by_icao)?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(bound = "T: Deserialize<'de>")]
struct DatasetArtifact<T> {
    iata: HashSet<String>,
    icao: HashSet<String>,
    by_iata: Vec<(String, Arc<T>)>,
    by_icao: Vec<(String, Arc<T>)>,
}

fn index<T, E: de::Error>(
    codes: &HashSet<String>,
    entries: Vec<(String, Arc<T>)>,
    scheme: &str,
) -> Result<CodeIndex<T>, E> {
    let mut index = CodeIndex::default();

    for (code, record) in entries {
        if !codes.contains(&code) {
            return Err(E::custom(format!("{scheme} code {code} is indexed but not listed")));
        }
        index.insert(code, record);
    }

    if index.len() != codes.len() {
        return Err(E::custom(format!("{scheme} codes without record")));
    }

    Ok(index)
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Dataset<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let artifact = DatasetArtifact::<T>::deserialize(deserializer)?;

        Ok(Self {
            by_iata: index::<_, D::Error>(&artifact.iata, artifact.by_iata, "IATA")?,
            by_icao: index::<_, D::Error>(&artifact.icao, artifact.by_icao, "ICAO")?,
            codes: Codes {
                iata: artifact.iata,
                icao: artifact.icao,
                kind: PhantomData,
            },
            errors: Vec::new(),
        })
    }
}

impl<T> Codes<T> {
    /// Writes the code lists as JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reads code lists written by [`to_json`](Self::to_json) or the code
    /// lists of a dataset artifact.
    pub fn from_json(s: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(s)?)
    }
}

impl<T: Coded + Serialize> Dataset<T> {
    /// Writes the dataset as JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<T: Coded + for<'de> Deserialize<'de>> Dataset<T> {
    /// Reads a dataset written by [`to_json`](Self::to_json).
    ///
    /// The read dataset has no errors. Records are no longer shared between
    /// both indexes.
    pub fn from_json(s: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(s)?)
    }
}
