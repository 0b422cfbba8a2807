//! Message texts for eVatR status codes and match indicators.
//!
//! BZSt answers with bare codes; the texts below are English renderings of
//! the documented meanings. Hosts that need other wording or another
//! language override individual entries on a [`MessageCatalog`] and pass it
//! through [`crate::verify::VerifierConfig`].

use std::collections::BTreeMap;

/// Lookup table for diagnostic texts, defaulting to the built-in English
/// renderings. Unknown codes fall back to the bare code so a new backend
/// code never breaks a call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    error_overrides: BTreeMap<String, String>,
    match_overrides: BTreeMap<String, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text for a status code (`ErrorCode` value).
    pub fn error_text<'a>(&'a self, code: &'a str) -> &'a str {
        if let Some(text) = self.error_overrides.get(code) {
            return text;
        }
        lookup(ERROR_TEXTS, code).unwrap_or(code)
    }

    /// Text for a match indicator (`Erg_*` value, A through D).
    pub fn match_text<'a>(&'a self, indicator: &'a str) -> &'a str {
        if let Some(text) = self.match_overrides.get(indicator) {
            return text;
        }
        lookup(MATCH_TEXTS, indicator).unwrap_or(indicator)
    }

    /// Override the text for one status code.
    pub fn set_error_text(&mut self, code: impl Into<String>, text: impl Into<String>) {
        self.error_overrides.insert(code.into(), text.into());
    }

    /// Override the text for one match indicator.
    pub fn set_match_text(&mut self, indicator: impl Into<String>, text: impl Into<String>) {
        self.match_overrides.insert(indicator.into(), text.into());
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .binary_search_by(|(k, _)| (*k).cmp(key))
        .ok()
        .map(|i| table[i].1)
}

/// Documented BZSt status codes (sorted for binary search).
static ERROR_TEXTS: &[(&str, &str)] = &[
    ("200", "The queried VAT ID is valid."),
    ("201", "The queried VAT ID is invalid."),
    (
        "202",
        "The queried VAT ID is invalid. It is not registered in the member state's trader file.",
    ),
    (
        "203",
        "The queried VAT ID is invalid. It only becomes valid at a later date.",
    ),
    (
        "204",
        "The queried VAT ID is invalid. It was only valid during an earlier period.",
    ),
    (
        "205",
        "The member state cannot answer the request right now. Try again later.",
    ),
    ("206", "Your German VAT ID is invalid."),
    (
        "207",
        "Your German VAT ID was issued for intra-community acquisition only; confirmation requests are not permitted.",
    ),
    (
        "208",
        "Another request for this VAT ID is already running. Try again later.",
    ),
    (
        "209",
        "The queried VAT ID is invalid. It does not match the member state's structure.",
    ),
    (
        "210",
        "The queried VAT ID is invalid. It fails the member state's check-digit rules.",
    ),
    (
        "211",
        "The queried VAT ID is invalid. It contains illegal characters.",
    ),
    (
        "212",
        "The queried VAT ID is invalid. It carries an unknown country prefix.",
    ),
    ("213", "Querying a German VAT ID is not possible."),
    (
        "214",
        "Your German VAT ID is malformed. It is 'DE' followed by nine digits.",
    ),
    (
        "215",
        "The request lacks data required for a simple confirmation and was not processed.",
    ),
    (
        "216",
        "The request lacks data required for a qualified confirmation. A simple confirmation was performed: the queried VAT ID is valid.",
    ),
    (
        "217",
        "An error occurred processing the member state's answer. The request was not processed.",
    ),
    (
        "218",
        "A qualified confirmation is currently not possible. A simple confirmation was performed: the queried VAT ID is valid.",
    ),
    (
        "219",
        "An error occurred during the qualified confirmation. A simple confirmation was performed: the queried VAT ID is valid.",
    ),
    (
        "220",
        "An error occurred requesting the official confirmation notice. No letter will be sent.",
    ),
    (
        "221",
        "The request parameters are incomplete or carry an invalid data type.",
    ),
    (
        "223",
        "The queried VAT ID is valid. The printed confirmation notice is no longer available.",
    ),
    (
        "999",
        "The request cannot be processed right now. Try again later.",
    ),
];

/// Qualified-confirmation match indicators (sorted for binary search).
static MATCH_TEXTS: &[(&str, &str)] = &[
    ("A", "matches the registered data"),
    ("B", "does not match the registered data"),
    ("C", "was not queried"),
    ("D", "is not disclosed by the member state"),
];
