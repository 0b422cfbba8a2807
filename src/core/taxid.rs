//! Tax ID plausibility gate and country/number splitting.

use serde::{Deserialize, Serialize};

use super::error::VerifyError;

/// A tax identifier split into country prefix and local number.
///
/// Produced by [`VatId::split_strict`] or [`VatId::split_lenient`]. Run
/// [`require_plausible`] on the raw string first; the splits themselves never
/// fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatId {
    /// 2-letter country prefix, verbatim as found in the input (or the
    /// caller-supplied fallback).
    pub country_code: Option<String>,
    /// Local number part.
    pub number: String,
}

/// Gate a raw identifier before any backend call.
///
/// Empty strings and anything of four characters or fewer fail as
/// [`VerifyError::InvalidTaxId`]: no real VAT ID fits in a 2-letter prefix
/// plus two characters. This is the sole precondition check; everything else
/// is left to the backend.
pub fn require_plausible(raw: &str) -> Result<(), VerifyError> {
    if raw.chars().count() <= 4 {
        return Err(VerifyError::InvalidTaxId(raw.to_string()));
    }
    Ok(())
}

impl VatId {
    /// Split policy used for eVatR: the first two characters are always the
    /// country prefix and the rest the number, regardless of content.
    /// [`VatId::prefixed`] round-trips the input unchanged.
    pub fn split_strict(raw: &str) -> Self {
        let split = raw.char_indices().nth(2).map_or(raw.len(), |(i, _)| i);
        Self {
            country_code: Some(raw[..split].to_string()),
            number: raw[split..].to_string(),
        }
    }

    /// Split policy used for VIES: strip the first two characters only when
    /// both are alphabetic. Anything else keeps the whole string as the
    /// number, with the country taken from `fallback_country` (an empty
    /// fallback yields no country at all).
    pub fn split_lenient(raw: &str, fallback_country: &str) -> Self {
        let mut chars = raw.chars();
        let prefix_is_alpha = matches!(
            (chars.next(), chars.next()),
            (Some(a), Some(b)) if a.is_alphabetic() && b.is_alphabetic()
        );
        if prefix_is_alpha {
            Self::split_strict(raw)
        } else {
            Self {
                country_code: (!fallback_country.is_empty())
                    .then(|| fallback_country.to_string()),
                number: raw.to_string(),
            }
        }
    }

    /// Reassemble `country_code + number`, e.g. for eVatR's `UstId_2`.
    pub fn prefixed(&self) -> String {
        match &self.country_code {
            Some(cc) => format!("{cc}{}", self.number),
            None => self.number.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_rejects_short_ids() {
        assert!(require_plausible("").is_err());
        assert!(require_plausible("DE1").is_err());
        assert!(require_plausible("DE12").is_err());
        assert!(require_plausible("DE123").is_ok());
    }

    #[test]
    fn strict_always_strips() {
        let id = VatId::split_strict("12345678");
        assert_eq!(id.country_code.as_deref(), Some("12"));
        assert_eq!(id.number, "345678");
    }

    #[test]
    fn strict_roundtrips_via_prefixed() {
        let raw = "ATU12345678";
        assert_eq!(VatId::split_strict(raw).prefixed(), raw);
    }

    #[test]
    fn lenient_strips_alpha_prefix() {
        let id = VatId::split_lenient("DE129273398", "AT");
        assert_eq!(id.country_code.as_deref(), Some("DE"));
        assert_eq!(id.number, "129273398");
    }

    #[test]
    fn lenient_falls_back_on_digits() {
        let id = VatId::split_lenient("129273398", "DE");
        assert_eq!(id.country_code.as_deref(), Some("DE"));
        assert_eq!(id.number, "129273398");
    }

    #[test]
    fn lenient_empty_fallback_yields_no_country() {
        let id = VatId::split_lenient("129273398", "");
        assert_eq!(id.country_code, None);
        assert_eq!(id.number, "129273398");
    }

    #[test]
    fn umlaut_prefix_counts_as_alphabetic() {
        let id = VatId::split_lenient("ÄÖ12345", "DE");
        assert_eq!(id.country_code.as_deref(), Some("ÄÖ"));
        assert_eq!(id.number, "12345");
    }
}
