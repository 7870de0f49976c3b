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

//! Code schemes and their formats.

use std::fmt::{Display, Formatter, Result};

/// The coding scheme of an identifier.
#[repr(C)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Scheme {
    /// International Air Transport Association code.
    Iata,
    /// International Civil Aviation Organization code.
    Icao,
}

impl Scheme {
    /// Detects the scheme of a code of the record type `T` by its length.
    ///
    /// Only the number of characters is considered, not the characters
    /// themselves. Returns `None` if the length matches neither scheme.
    ///
    /// # Examples
    ///
    /// ```
    /// use aviation_codes::{Airport, Scheme};
    ///
    /// assert_eq!(Scheme::detect::<Airport>("LAX"), Some(Scheme::Iata));
    /// assert_eq!(Scheme::detect::<Airport>("k1x!"), Some(Scheme::Icao));
    /// assert_eq!(Scheme::detect::<Airport>("LA"), None);
    /// ```
    pub fn detect<T: Coded>(code: &str) -> Option<Self> {
        let len = code.chars().count();

        if len == T::IATA.width() {
            Some(Self::Iata)
        } else if len == T::ICAO.width() {
            Some(Self::Icao)
        } else {
            None
        }
    }
}

impl Display for Scheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Iata => write!(f, "IATA"),
            Self::Icao => write!(f, "ICAO"),
        }
    }
}

/// The shape of a code: its length and the allowed characters.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CodeFormat {
    /// A fixed number of ASCII letters.
    Letters(usize),
    /// A fixed number of ASCII letters or digits.
    Alphanumeric(usize),
}

impl CodeFormat {
    /// The number of characters of a code.
    pub const fn width(&self) -> usize {
        match self {
            Self::Letters(n) | Self::Alphanumeric(n) => *n,
        }
    }

    /// Returns `true` if the code has this format, regardless of the case.
    ///
    /// This is a pure shape check. It doesn't tell whether the code is
    /// assigned.
    pub fn matches(&self, code: &str) -> bool {
        let valid = match self {
            Self::Letters(_) => u8::is_ascii_alphabetic,
            Self::Alphanumeric(_) => u8::is_ascii_alphanumeric,
        };

        code.len() == self.width() && code.bytes().all(|b| valid(&b))
    }
}

/// A record which is identified by an IATA and ICAO code.
pub trait Coded {
    /// Lowercase name of the record kind, e.g. "airport".
    const KIND: &'static str;

    /// The format of the IATA code.
    const IATA: CodeFormat;

    /// The format of the ICAO code.
    const ICAO: CodeFormat;

    /// The IATA code as read from the source or an empty string.
    fn iata(&self) -> &str;

    /// The ICAO code as read from the source or an empty string.
    fn icao(&self) -> &str;

    /// Returns the format of the scheme.
    fn format(scheme: Scheme) -> CodeFormat {
        match scheme {
            Scheme::Iata => Self::IATA,
            Scheme::Icao => Self::ICAO,
        }
    }

    /// Returns the code of the scheme.
    fn code(&self, scheme: Scheme) -> &str {
        match scheme {
            Scheme::Iata => self.iata(),
            Scheme::Icao => self.icao(),
        }
    }
}

/// Normalizes a code to the form in which it is indexed.
#[inline]
pub(crate) fn normalize(code: &str) -> String {
    code.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters() {
        let format = CodeFormat::Letters(3);

        assert!(format.matches("LAX"));
        assert!(format.matches("jfk"));
        assert!(format.matches("LhR"));
        assert!(!format.matches("LA"));
        assert!(!format.matches("LAXS"));
        assert!(!format.matches("L1X"));
        assert!(!format.matches(""));
        assert!(!format.matches("ÄÖÜ"));
    }

    #[test]
    fn alphanumeric() {
        let format = CodeFormat::Alphanumeric(2);

        assert!(format.matches("AA"));
        assert!(format.matches("ua"));
        assert!(format.matches("2A"));
        assert!(format.matches("99"));
        assert!(!format.matches("A"));
        assert!(!format.matches("AAL"));
        assert!(!format.matches("A-"));
        assert!(!format.matches(""));
    }

    #[test]
    fn scheme_is_displayed_as_acronym() {
        assert_eq!(Scheme::Iata.to_string(), "IATA");
        assert_eq!(Scheme::Icao.to_string(), "ICAO");
    }
}
