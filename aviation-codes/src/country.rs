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

//! Country name to ISO 3166-1 alpha-2 code normalization.
//!
//! OpenFlights names countries in plain English, but some names predate ISO
//! updates (Burma, Netherlands Antilles), are colloquial (Korea, Laos) or
//! refer to territories without own code (Wake Island). Those names are
//! corrected by a closed list of overrides before the general English name
//! lookup is consulted.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// OpenFlights country names which the general lookup resolves wrong or not
/// at all.
const OVERRIDES: &[(&str, &str)] = &[
    ("Burma", "MM"),
    ("Congo (Brazzaville)", "CG"),
    ("Congo (Kinshasa)", "CD"),
    ("Cote d'Ivoire", "CI"),
    ("East Timor", "TL"),
    ("Falkland Islands", "FK"),
    ("Faroe Islands", "FO"),
    ("French Guiana", "GF"),
    ("French Polynesia", "PF"),
    ("Guadeloupe", "GP"),
    ("Hong Kong", "HK"),
    ("Iran", "IR"),
    ("Johnston Atoll", "UM"),
    ("Korea", "KR"),
    ("Laos", "LA"),
    ("Macau", "MO"),
    ("Martinique", "MQ"),
    ("Mayotte", "YT"),
    ("Midway Islands", "UM"),
    ("Moldova", "MD"),
    ("Netherlands Antilles", "AN"),
    ("North Korea", "KP"),
    ("Palestine", "PS"),
    ("Reunion", "RE"),
    ("Russia", "RU"),
    ("Saint Helena", "SH"),
    ("Saint Kitts and Nevis", "KN"),
    ("Saint Lucia", "LC"),
    ("Saint Pierre and Miquelon", "PM"),
    ("Saint Vincent and the Grenadines", "VC"),
    ("Sao Tome and Principe", "ST"),
    ("South Korea", "KR"),
    ("Syria", "SY"),
    ("Taiwan", "TW"),
    ("Tanzania", "TZ"),
    ("Trinidad and Tobago", "TT"),
    ("Turks and Caicos Islands", "TC"),
    ("Venezuela", "VE"),
    ("Vietnam", "VN"),
    ("Virgin Islands", "VI"),
    ("Wake Island", "UM"),
    ("Wallis and Futuna", "WF"),
    ("Western Sahara", "EH"),
];

/// English country names by ISO 3166-1 alpha-2 code. The first name is the
/// official short name, the others are common alternatives. A name listed
/// for more than one code resolves to the first code.
const COUNTRIES: &[(&str, &[&str])] = &[
    ("AF", &["Afghanistan"]),
    ("AL", &["Albania"]),
    ("DZ", &["Algeria"]),
    ("AS", &["American Samoa"]),
    ("AD", &["Andorra"]),
    ("AO", &["Angola"]),
    ("AI", &["Anguilla"]),
    ("AQ", &["Antarctica"]),
    ("AG", &["Antigua and Barbuda"]),
    ("AR", &["Argentina"]),
    ("AM", &["Armenia"]),
    ("AW", &["Aruba"]),
    ("AU", &["Australia"]),
    ("AT", &["Austria"]),
    ("AZ", &["Azerbaijan"]),
    ("BS", &["Bahamas"]),
    ("BH", &["Bahrain"]),
    ("BD", &["Bangladesh"]),
    ("BB", &["Barbados"]),
    ("BY", &["Belarus"]),
    ("BE", &["Belgium"]),
    ("BZ", &["Belize"]),
    ("BJ", &["Benin"]),
    ("BM", &["Bermuda"]),
    ("BT", &["Bhutan"]),
    ("BO", &["Bolivia"]),
    ("BA", &["Bosnia and Herzegovina"]),
    ("BW", &["Botswana"]),
    ("BV", &["Bouvet Island"]),
    ("BR", &["Brazil"]),
    ("IO", &["British Indian Ocean Territory"]),
    ("BN", &["Brunei Darussalam"]),
    ("BG", &["Bulgaria"]),
    ("BF", &["Burkina Faso"]),
    ("BI", &["Burundi"]),
    ("KH", &["Cambodia"]),
    ("CM", &["Cameroon"]),
    ("CA", &["Canada"]),
    ("CV", &["Cape Verde", "Cabo Verde"]),
    ("KY", &["Cayman Islands"]),
    ("CF", &["Central African Republic"]),
    ("TD", &["Chad"]),
    ("CL", &["Chile"]),
    ("CN", &["People's Republic of China", "China"]),
    ("CX", &["Christmas Island"]),
    ("CC", &["Cocos (Keeling) Islands"]),
    ("CO", &["Colombia"]),
    ("KM", &["Comoros"]),
    ("CG", &["Republic of the Congo", "Congo"]),
    ("CD", &["Democratic Republic of the Congo", "Congo"]),
    ("CK", &["Cook Islands"]),
    ("CR", &["Costa Rica"]),
    ("CI", &["Cote d'Ivoire", "Côte d'Ivoire", "Ivory Coast"]),
    ("HR", &["Croatia"]),
    ("CU", &["Cuba"]),
    ("CY", &["Cyprus"]),
    ("CZ", &["Czech Republic", "Czechia"]),
    ("DK", &["Denmark"]),
    ("DJ", &["Djibouti"]),
    ("DM", &["Dominica"]),
    ("DO", &["Dominican Republic"]),
    ("EC", &["Ecuador"]),
    ("EG", &["Egypt"]),
    ("SV", &["El Salvador"]),
    ("GQ", &["Equatorial Guinea"]),
    ("ER", &["Eritrea"]),
    ("EE", &["Estonia"]),
    ("ET", &["Ethiopia"]),
    ("FK", &["Falkland Islands (Malvinas)", "Falkland Islands"]),
    ("FO", &["Faroe Islands"]),
    ("FJ", &["Fiji"]),
    ("FI", &["Finland"]),
    ("FR", &["France"]),
    ("GF", &["French Guiana"]),
    ("PF", &["French Polynesia"]),
    ("TF", &["French Southern Territories"]),
    ("GA", &["Gabon"]),
    ("GM", &["Republic of The Gambia", "The Gambia", "Gambia"]),
    ("GE", &["Georgia"]),
    ("DE", &["Germany"]),
    ("GH", &["Ghana"]),
    ("GI", &["Gibraltar"]),
    ("GR", &["Greece"]),
    ("GL", &["Greenland"]),
    ("GD", &["Grenada"]),
    ("GP", &["Guadeloupe"]),
    ("GU", &["Guam"]),
    ("GT", &["Guatemala"]),
    ("GN", &["Guinea"]),
    ("GW", &["Guinea-Bissau"]),
    ("GY", &["Guyana"]),
    ("HT", &["Haiti"]),
    ("HM", &["Heard Island and McDonald Islands"]),
    ("VA", &["Holy See", "Vatican City"]),
    ("HN", &["Honduras"]),
    ("HK", &["Hong Kong"]),
    ("HU", &["Hungary"]),
    ("IS", &["Iceland"]),
    ("IN", &["India"]),
    ("ID", &["Indonesia"]),
    ("IR", &["Islamic Republic of Iran", "Iran"]),
    ("IQ", &["Iraq"]),
    ("IE", &["Ireland"]),
    ("IL", &["Israel"]),
    ("IT", &["Italy"]),
    ("JM", &["Jamaica"]),
    ("JP", &["Japan"]),
    ("JO", &["Jordan"]),
    ("KZ", &["Kazakhstan"]),
    ("KE", &["Kenya"]),
    ("KI", &["Kiribati"]),
    ("KP", &["North Korea"]),
    ("KR", &["South Korea"]),
    ("KW", &["Kuwait"]),
    ("KG", &["Kyrgyzstan"]),
    ("LA", &["Lao People's Democratic Republic"]),
    ("LV", &["Latvia"]),
    ("LB", &["Lebanon"]),
    ("LS", &["Lesotho"]),
    ("LR", &["Liberia"]),
    ("LY", &["Libya"]),
    ("LI", &["Liechtenstein"]),
    ("LT", &["Lithuania"]),
    ("LU", &["Luxembourg"]),
    ("MO", &["Macao"]),
    ("MG", &["Madagascar"]),
    ("MW", &["Malawi"]),
    ("MY", &["Malaysia"]),
    ("MV", &["Maldives"]),
    ("ML", &["Mali"]),
    ("MT", &["Malta"]),
    ("MH", &["Marshall Islands"]),
    ("MQ", &["Martinique"]),
    ("MR", &["Mauritania"]),
    ("MU", &["Mauritius"]),
    ("YT", &["Mayotte"]),
    ("MX", &["Mexico"]),
    ("FM", &["Micronesia, Federated States of"]),
    ("MD", &["Moldova, Republic of", "Moldova"]),
    ("MC", &["Monaco"]),
    ("MN", &["Mongolia"]),
    ("MS", &["Montserrat"]),
    ("MA", &["Morocco"]),
    ("MZ", &["Mozambique"]),
    ("MM", &["Myanmar"]),
    ("NA", &["Namibia"]),
    ("NR", &["Nauru"]),
    ("NP", &["Nepal"]),
    ("NL", &["Netherlands", "The Netherlands"]),
    ("NC", &["New Caledonia"]),
    ("NZ", &["New Zealand"]),
    ("NI", &["Nicaragua"]),
    ("NE", &["Niger"]),
    ("NG", &["Nigeria"]),
    ("NU", &["Niue"]),
    ("NF", &["Norfolk Island"]),
    ("MK", &["North Macedonia", "The Republic of North Macedonia"]),
    ("MP", &["Northern Mariana Islands"]),
    ("NO", &["Norway"]),
    ("OM", &["Oman"]),
    ("PK", &["Pakistan"]),
    ("PW", &["Palau"]),
    ("PS", &["State of Palestine", "Palestine"]),
    ("PA", &["Panama"]),
    ("PG", &["Papua New Guinea"]),
    ("PY", &["Paraguay"]),
    ("PE", &["Peru"]),
    ("PH", &["Philippines"]),
    ("PN", &["Pitcairn", "Pitcairn Islands"]),
    ("PL", &["Poland"]),
    ("PT", &["Portugal"]),
    ("PR", &["Puerto Rico"]),
    ("QA", &["Qatar"]),
    ("RE", &["Reunion", "Réunion"]),
    ("RO", &["Romania"]),
    ("RU", &["Russian Federation", "Russia"]),
    ("RW", &["Rwanda"]),
    ("SH", &["Saint Helena, Ascension and Tristan da Cunha"]),
    ("KN", &["Saint Kitts and Nevis"]),
    ("LC", &["Saint Lucia"]),
    ("PM", &["Saint Pierre and Miquelon"]),
    ("VC", &["Saint Vincent and the Grenadines"]),
    ("WS", &["Samoa"]),
    ("SM", &["San Marino"]),
    ("ST", &["Sao Tome and Principe"]),
    ("SA", &["Saudi Arabia"]),
    ("SN", &["Senegal"]),
    ("SC", &["Seychelles"]),
    ("SL", &["Sierra Leone"]),
    ("SG", &["Singapore"]),
    ("SK", &["Slovakia"]),
    ("SI", &["Slovenia"]),
    ("SB", &["Solomon Islands"]),
    ("SO", &["Somalia"]),
    ("ZA", &["South Africa"]),
    ("GS", &["South Georgia and the South Sandwich Islands"]),
    ("ES", &["Spain"]),
    ("LK", &["Sri Lanka"]),
    ("SD", &["Sudan"]),
    ("SR", &["Suriname"]),
    ("SJ", &["Svalbard and Jan Mayen"]),
    ("SZ", &["Eswatini", "Swaziland"]),
    ("SE", &["Sweden"]),
    ("CH", &["Switzerland"]),
    ("SY", &["Syrian Arab Republic", "Syria"]),
    ("TW", &["Taiwan, Province of China", "Taiwan"]),
    ("TJ", &["Tajikistan"]),
    ("TZ", &["United Republic of Tanzania", "Tanzania"]),
    ("TH", &["Thailand"]),
    ("TL", &["Timor-Leste"]),
    ("TG", &["Togo"]),
    ("TK", &["Tokelau"]),
    ("TO", &["Tonga"]),
    ("TT", &["Trinidad and Tobago"]),
    ("TN", &["Tunisia"]),
    ("TR", &["Türkiye", "Turkey"]),
    ("TM", &["Turkmenistan"]),
    ("TC", &["Turks and Caicos Islands"]),
    ("TV", &["Tuvalu"]),
    ("UG", &["Uganda"]),
    ("UA", &["Ukraine"]),
    ("AE", &["United Arab Emirates", "UAE"]),
    ("GB", &["United Kingdom", "UK", "Great Britain"]),
    (
        "US",
        &[
            "United States of America",
            "United States",
            "USA",
            "U.S.A.",
            "US",
            "U.S.",
        ],
    ),
    ("UM", &["United States Minor Outlying Islands"]),
    ("UY", &["Uruguay"]),
    ("UZ", &["Uzbekistan"]),
    ("VU", &["Vanuatu"]),
    ("VE", &["Venezuela", "Bolivarian Republic of Venezuela"]),
    ("VN", &["Vietnam", "Viet Nam"]),
    ("VG", &["Virgin Islands, British", "British Virgin Islands"]),
    ("VI", &["Virgin Islands, U.S.", "United States Virgin Islands"]),
    ("WF", &["Wallis and Futuna"]),
    ("EH", &["Western Sahara"]),
    ("YE", &["Yemen"]),
    ("ZM", &["Zambia"]),
    ("ZW", &["Zimbabwe"]),
    ("AX", &["Åland Islands", "Aland Islands"]),
    ("BQ", &["Bonaire, Sint Eustatius and Saba"]),
    ("CW", &["Curaçao", "Curacao"]),
    ("GG", &["Guernsey"]),
    ("IM", &["Isle of Man"]),
    ("JE", &["Jersey"]),
    ("ME", &["Montenegro"]),
    ("BL", &["Saint Barthélemy", "Saint Barthelemy"]),
    ("MF", &["Saint Martin (French part)", "Saint Martin"]),
    ("RS", &["Serbia"]),
    ("SX", &["Sint Maarten (Dutch part)", "Sint Maarten"]),
    ("SS", &["South Sudan"]),
    ("XK", &["Kosovo"]),
];

static OVERRIDE_CODES: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| OVERRIDES.iter().copied().collect());

static CODES_BY_NAME: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    let mut codes = HashMap::new();

    for (code, names) in COUNTRIES {
        for name in names.iter() {
            codes.entry(name.to_lowercase()).or_insert(*code);
        }
    }

    codes
});

/// Returns the ISO 3166-1 alpha-2 code of an OpenFlights country name.
///
/// The name is first looked up in the overrides, which must match exactly.
/// Otherwise the name is [resolved](resolve) as English country name. An
/// empty string is returned if the name is empty or unknown.
///
/// # Examples
///
/// ```
/// use aviation_codes::country;
///
/// assert_eq!(country::alpha2("United States"), "US");
/// assert_eq!(country::alpha2("Burma"), "MM");
/// assert_eq!(country::alpha2("Atlantis"), "");
/// ```
pub fn alpha2(name: &str) -> &'static str {
    if name.is_empty() {
        return "";
    }

    OVERRIDE_CODES
        .get(name)
        .copied()
        .or_else(|| resolve(name))
        .unwrap_or_default()
}

/// Resolves an English country name to its ISO 3166-1 alpha-2 code without
/// consulting the overrides.
///
/// The name must match the official short name or a common alternative,
/// ignoring the case.
pub fn resolve(name: &str) -> Option<&'static str> {
    CODES_BY_NAME.get(&name.to_lowercase()).copied()
}

/// An override whose name the general lookup resolves to another code.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct DivergingOverride {
    pub name: &'static str,
    pub override_code: &'static str,
    pub resolved_code: &'static str,
}

/// Returns all overrides which contradict the general lookup.
///
/// Overrides which the general lookup can't resolve at all are not
/// contradicting. A non-empty result means one of both tables is stale.
pub fn diverging_overrides() -> Vec<DivergingOverride> {
    OVERRIDES
        .iter()
        .filter_map(|&(name, override_code)| {
            resolve(name)
                .filter(|&resolved_code| resolved_code != override_code)
                .map(|resolved_code| DivergingOverride {
                    name,
                    override_code,
                    resolved_code,
                })
        })
        .collect()
}
