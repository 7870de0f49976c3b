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

use aviation_codes::{Airline, Airport, Codes, Scheme};
use wasm_bindgen::prelude::*;

macro_rules! js_codes {
    ($js:ident, $name:ident, $js_validator:ident, $validator_name:ident, $record:ty) => {
        /// The valid codes without records.
        #[wasm_bindgen(js_name = $name)]
        pub struct $js {
            inner: Rc<Codes<$record>>,
        }

        #[wasm_bindgen(js_class = $name)]
        impl $js {
            /// Loads the codes from a code or dataset artifact.
            #[wasm_bindgen(js_name = fromJson)]
            pub fn from_json(json: &str) -> Result<Self, JsError> {
                Ok(Self {
                    inner: Rc::new(Codes::from_json(json)?),
                })
            }

            #[wasm_bindgen(getter)]
            pub fn iata(&self) -> $js_validator {
                $js_validator {
                    codes: Rc::clone(&self.inner),
                    scheme: Scheme::Iata,
                }
            }

            #[wasm_bindgen(getter)]
            pub fn icao(&self) -> $js_validator {
                $js_validator {
                    codes: Rc::clone(&self.inner),
                    scheme: Scheme::Icao,
                }
            }

            pub fn is(&self, code: &str) -> bool {
                self.inner.is(code)
            }
        }

        #[wasm_bindgen(js_name = $validator_name)]
        pub struct $js_validator {
            codes: Rc<Codes<$record>>,
            scheme: Scheme,
        }

        #[wasm_bindgen(js_class = $validator_name)]
        impl $js_validator {
            #[wasm_bindgen(js_name = isFormat)]
            pub fn is_format(&self, code: &str) -> bool {
                self.codes.validator(self.scheme).is_format(code)
            }

            pub fn is(&self, code: &str) -> bool {
                self.codes.validator(self.scheme).is(code)
            }
        }
    };
}

js_codes!(JsAirportCodes, AirportCodes, JsAirportValidator, AirportValidator, Airport);
js_codes!(JsAirlineCodes, AirlineCodes, JsAirlineValidator, AirlineValidator, Airline);
