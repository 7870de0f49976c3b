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

use std::rc::Rc;

use aviation_codes::{Airline, Airport, Coded, Dataset, Scheme, SearchOptions};
use wasm_bindgen::prelude::*;

use crate::{parse_result, warn_errors};

macro_rules! js_dataset {
    ($js:ident, $name:ident, $js_lookup:ident, $lookup_name:ident, $record:ty) => {
        /// All records with their codes.
        #[wasm_bindgen(js_name = $name)]
        pub struct $js {
            inner: Rc<Dataset<$record>>,
        }

        #[wasm_bindgen(js_class = $name)]
        impl $js {
            /// Loads the records from an OpenFlights table.
            #[wasm_bindgen(js_name = fromOpenFlights)]
            pub fn from_openflights(data: &str) -> Self {
                let inner = Dataset::<$record>::from_openflights(data);
                warn_errors(<$record>::KIND, inner.errors());
                Self {
                    inner: Rc::new(inner),
                }
            }

            /// Loads the records from a dataset artifact.
            #[wasm_bindgen(js_name = fromJson)]
            pub fn from_json(json: &str) -> Result<Self, JsError> {
                Ok(Self {
                    inner: Rc::new(Dataset::from_json(json)?),
                })
            }

            #[wasm_bindgen(getter)]
            pub fn iata(&self) -> $js_lookup {
                $js_lookup {
                    dataset: Rc::clone(&self.inner),
                    scheme: Scheme::Iata,
                }
            }

            #[wasm_bindgen(getter)]
            pub fn icao(&self) -> $js_lookup {
                $js_lookup {
                    dataset: Rc::clone(&self.inner),
                    scheme: Scheme::Icao,
                }
            }

            pub fn is(&self, code: &str) -> bool {
                self.inner.is(code)
            }

            /// Returns the record or `undefined`.
            pub fn get(&self, code: &str) -> Result<JsValue, JsValue> {
                Ok(serde_wasm_bindgen::to_value(&self.inner.get(code))?)
            }

            pub fn parse(&self, code: &str) -> Result<JsValue, JsValue> {
                parse_result(self.inner.parse(code))
            }

            /// Searches records by name, city or callsign, country and code.
            pub fn search(
                &self,
                query: &str,
                limit: Option<usize>,
                active_only: Option<bool>,
            ) -> Result<JsValue, JsValue> {
                let mut options = SearchOptions::default();
                if let Some(limit) = limit {
                    options = options.with_limit(limit);
                }
                if active_only.unwrap_or_default() {
                    options = options.only_active();
                }

                Ok(serde_wasm_bindgen::to_value(
                    &self.inner.search(query, options),
                )?)
            }
        }

        /// Codes of one scheme.
        #[wasm_bindgen(js_name = $lookup_name)]
        pub struct $js_lookup {
            dataset: Rc<Dataset<$record>>,
            scheme: Scheme,
        }

        #[wasm_bindgen(js_class = $lookup_name)]
        impl $js_lookup {
            #[wasm_bindgen(js_name = isFormat)]
            pub fn is_format(&self, code: &str) -> bool {
                self.dataset.lookup(self.scheme).is_format(code)
            }

            pub fn is(&self, code: &str) -> bool {
                self.dataset.lookup(self.scheme).is(code)
            }

            /// Returns the record or `undefined`.
            pub fn get(&self, code: &str) -> Result<JsValue, JsValue> {
                Ok(serde_wasm_bindgen::to_value(
                    &self.dataset.lookup(self.scheme).get(code),
                )?)
            }

            pub fn parse(&self, code: &str) -> Result<JsValue, JsValue> {
                parse_result(self.dataset.lookup(self.scheme).parse(code))
            }

            pub fn codes(&self) -> Vec<String> {
                self.dataset.lookup(self.scheme).codes()
            }

            pub fn count(&self) -> usize {
                self.dataset.lookup(self.scheme).count()
            }
        }
    };
}

js_dataset!(JsAirports, Airports, JsAirportLookup, AirportLookup, Airport);
js_dataset!(JsAirlines, Airlines, JsAirlineLookup, AirlineLookup, Airline);
