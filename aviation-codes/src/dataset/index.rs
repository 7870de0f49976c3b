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

//! Code to record index which keeps the insertion order.

use std::collections::HashMap;
use std::sync::Arc;

/// Records indexed by code.
///
/// Iteration follows the order in which codes were first inserted.
/// Re-inserting a code replaces its record but keeps its position.
#[derive(Clone, PartialEq, Debug)]
pub(crate) struct CodeIndex<T> {
    entries: Vec<(String, Arc<T>)>,
    positions: HashMap<String, usize>,
}

impl<T> CodeIndex<T> {
    pub(crate) fn insert(&mut self, code: String, record: Arc<T>) {
        match self.positions.get(&code) {
            Some(&i) => self.entries[i].1 = record,
            None => {
                self.positions.insert(code.clone(), self.entries.len());
                self.entries.push((code, record));
            }
        }
    }

    pub(crate) fn get(&self, code: &str) -> Option<&Arc<T>> {
        self.positions.get(code).map(|&i| &self.entries[i].1)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &Arc<T>)> + '_ {
        self.entries.iter().map(|(code, record)| (code.as_str(), record))
    }

    pub(crate) fn codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(code, _)| code.as_str())
    }

    pub(crate) fn records(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter().map(|(_, record)| record.as_ref())
    }
}

impl<T> Default for CodeIndex<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut index = CodeIndex::default();
        index.insert("LAX".to_string(), Arc::new(1));
        index.insert("JFK".to_string(), Arc::new(2));
        index.insert("BUR".to_string(), Arc::new(3));

        assert_eq!(index.codes().collect::<Vec<_>>(), vec!["LAX", "JFK", "BUR"]);
    }

    #[test]
    fn last_record_wins_at_first_position() {
        let mut index = CodeIndex::default();
        index.insert("LAX".to_string(), Arc::new(1));
        index.insert("JFK".to_string(), Arc::new(2));
        index.insert("LAX".to_string(), Arc::new(3));

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("LAX").map(|r| **r), Some(3));
        assert_eq!(index.records().copied().collect::<Vec<_>>(), vec![3, 2]);
    }

    #[test]
    fn unknown_code() {
        let index: CodeIndex<u8> = CodeIndex::default();
        assert!(index.get("LAX").is_none());
    }
}
