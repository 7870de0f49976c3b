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

use std::collections::HashSet;
use std::marker::PhantomData;
use std::sync::Arc;

use log::info;

use super::index::CodeIndex;
use super::{Codes, Dataset};
use crate::code::{normalize, Coded, Scheme};
use crate::error::Error;

/// Dataset factory, which is used to build a [dataset].
///
/// Records without any code are discarded. A code is indexed only if it
/// has the width of its scheme, e.g. three characters for the IATA code of
/// an airport. Codes are indexed in uppercase, while the record keeps the
/// code as added.
///
/// [dataset]: super::Dataset
pub struct DatasetBuilder<T> {
    iata: CodeIndex<T>,
    icao: CodeIndex<T>,
    discarded: usize,
    errors: Vec<Error>,
}

impl<T: Coded> DatasetBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> Dataset<T> {
        info!(
            "Processed {} IATA {kind} codes, {} ICAO {kind} codes",
            self.iata.len(),
            self.icao.len(),
            kind = T::KIND,
        );

        if self.discarded > 0 || !self.errors.is_empty() {
            info!(
                "Skipped {} {kind}s without code and {} invalid lines",
                self.discarded,
                self.errors.len(),
                kind = T::KIND,
            );
        }

        let codes = Codes {
            iata: self.iata.codes().map(str::to_string).collect::<HashSet<_>>(),
            icao: self.icao.codes().map(str::to_string).collect::<HashSet<_>>(),
            kind: PhantomData,
        };

        Dataset {
            codes,
            by_iata: self.iata,
            by_icao: self.icao,
            errors: self.errors,
        }
    }

    pub fn add(&mut self, record: T) {
        if record.iata().is_empty() && record.icao().is_empty() {
            self.discarded += 1;
            return;
        }

        let record = Arc::new(record);

        for (scheme, index) in [
            (Scheme::Iata, &mut self.iata),
            (Scheme::Icao, &mut self.icao),
        ] {
            let code = record.code(scheme);

            if code.chars().count() == T::format(scheme).width() {
                index.insert(normalize(code), Arc::clone(&record));
            }
        }
    }

    pub fn add_error<E>(&mut self, e: E)
    where
        E: Into<Error>,
    {
        self.errors.push(e.into());
    }
}

impl<T> Default for DatasetBuilder<T> {
    fn default() -> Self {
        Self {
            iata: CodeIndex::default(),
            icao: CodeIndex::default(),
            discarded: 0,
            errors: Vec::new(),
        }
    }
}

impl<T: Coded> Extend<T> for DatasetBuilder<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, records: I) {
        records.into_iter().for_each(|record| self.add(record));
    }
}

impl<T: Coded> FromIterator<T> for Dataset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(records: I) -> Self {
        let mut builder = DatasetBuilder::new();
        builder.extend(records);
        builder.build()
    }
}
