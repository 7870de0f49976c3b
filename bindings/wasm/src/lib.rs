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

//! JavaScript bindings of the airport and airline codes.
//!
//! Datasets are loaded either from the OpenFlights tables or from the JSON
//! artifacts written by `aviation-codes-build`. Records are returned as
//! plain objects and parse results as `{ ok: true, data }` or `{ ok: false }`.

use aviation_codes::{Error, Parsed};
use serde::Serialize;
use wasm_bindgen::prelude::*;

mod codes;
mod dataset;

pub use codes::*;
pub use dataset::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

#[derive(Serialize)]
struct ParseResult<'a, T> {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
}

fn parse_result<T: Serialize>(parsed: Parsed<'_, T>) -> Result<JsValue, JsValue> {
    let data = parsed.found();
    let result = ParseResult {
        ok: data.is_some(),
        data,
    };

    Ok(serde_wasm_bindgen::to_value(&result)?)
}

fn warn_errors(kind: &str, errors: &[Error]) {
    if !errors.is_empty() {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "skipped {} invalid {kind} lines",
            errors.len()
        )));
    }
}
