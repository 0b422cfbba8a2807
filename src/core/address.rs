//! Free-text address decomposition.

use serde::{Deserialize, Serialize};

use super::error::VerifyError;

/// An address decomposed from a backend's free-text block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredAddress {
    /// Street and house number (line 1, trimmed).
    pub street: String,
    /// Postal code (first 5 characters of line 2).
    pub postal_code: String,
    /// Locality between postal code and country code.
    pub locality: String,
    /// 2-letter country/location code (last 2 characters of line 2).
    pub country_locode: String,
}

/// Decompose a backend's free-text address into structured fields.
///
/// The backends render addresses as `street\npostal locality country`, e.g.
/// `"Marienplatz 1\n80331 München DE"`. Line 2 is a fixed-offset record:
/// characters `[0,5)` are the postal code, the trailing two the country
/// code, and `[6, len-3)` the locality. Lines beyond the second are ignored.
///
/// An address with fewer than two lines is not an error; it is simply not
/// decomposable and yields `Ok(None)`. Trailing newlines do not count as
/// lines. A second line too short for the fixed offsets (under 9 characters
/// once trimmed) fails with [`VerifyError::MalformedAddressLine`].
pub fn decompose_address(raw: &str) -> Result<Option<StructuredAddress>, VerifyError> {
    // A trailing newline run is not a second line.
    let mut lines = raw.trim_end_matches('\n').split('\n');
    let (Some(street), Some(line2)) = (lines.next(), lines.next()) else {
        return Ok(None);
    };

    // Indexing is by chars, not bytes, so umlauts cannot split a code point.
    let chars: Vec<char> = line2.trim().chars().collect();
    if chars.len() < 9 {
        return Err(VerifyError::MalformedAddressLine(line2.trim().to_string()));
    }

    Ok(Some(StructuredAddress {
        street: street.trim().to_string(),
        postal_code: chars[..5].iter().collect(),
        locality: chars[6..chars.len() - 3].iter().collect(),
        country_locode: chars[chars.len() - 2..].iter().collect(),
    }))
}
