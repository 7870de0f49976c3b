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

//! Records of the OpenFlights tables.
//!
//! Each record keeps every column of its table as [`Field`](crate::Field) in
//! the order of the table. Columns are identified by position only since the
//! tables have no header line.

mod airline;
mod airport;

pub use airline::Airline;
pub use airport::Airport;
