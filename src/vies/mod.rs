//! EU VIES REST API backend.
//!
//! One JSON POST per check: `{"countryCode", "vatNumber"}` against the
//! check-vat-number endpoint. Success bodies carry `valid` plus the
//! registered name and address where the member state discloses them; error
//! bodies carry an `errorWrappers` array.
//!
//! # Example
//!
//! ```ignore
//! use ustid::vies;
//!
//! let reply = vies::check("DE", "129273398").await?;
//! assert!(reply.valid);
//! ```

mod client;
mod response;

pub use response::ViesReply;

pub(crate) use client::fetch_with;

use crate::core::VerifyError;
use crate::transport::{DEFAULT_TIMEOUT, HttpTransport};

/// Production endpoint for check-vat-number calls.
pub const CHECK_VAT_URL: &str =
    "https://ec.europa.eu/taxation_customs/vies/rest-api/check-vat-number";

/// Check a VAT number against VIES with the default 30 second timeout.
///
/// `country_code` is the 2-letter ISO code (e.g. "DE"), `vat_number` the
/// number part without the prefix. This is the low-level call returning
/// VIES's own reply shape; [`crate::verify::Verifier`] wraps it with the
/// plausibility gate, normalization, and address decomposition.
///
/// The VIES API is a free public service and needs no authentication.
///
/// # Errors
///
/// [`VerifyError::Timeout`] and [`VerifyError::Transport`] on network
/// trouble, [`VerifyError::Http`] on non-200 answers,
/// [`VerifyError::EmptyResponseBody`] and [`VerifyError::UnexpectedResponse`]
/// on degenerate bodies.
pub async fn check(country_code: &str, vat_number: &str) -> Result<ViesReply, VerifyError> {
    let transport = HttpTransport::new(DEFAULT_TIMEOUT)?;
    fetch_with(&transport, CHECK_VAT_URL, country_code, vat_number).await
}
