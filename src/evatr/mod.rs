//! BZSt eVatR confirmation backend.
//!
//! The Bundeszentralamt für Steuern lets German businesses confirm foreign
//! EU VAT IDs. One GET per check against the evatrRPC endpoint; the answer
//! is an XML-RPC style document of name/value string pairs. Passing the
//! foreign company's name and address upgrades the call to a qualified
//! confirmation with per-field match indicators.
//!
//! Requires a German VAT ID as `UstId_1`. Only `DE` requesters are served.
//!
//! # Example
//!
//! ```ignore
//! use ustid::evatr::{self, EvatrQuery};
//!
//! let query = EvatrQuery {
//!     own_vat_id: "DE129273398".into(),
//!     vat_id: "ATU12345678".into(),
//!     company_name: "ACME GmbH".into(),
//!     ..EvatrQuery::default()
//! };
//! let reply = evatr::check(&query).await?;
//! assert!(reply.valid);
//! for line in &reply.diagnostics {
//!     println!("{line}");
//! }
//! ```

mod client;
mod codes;
mod params;
mod response;

pub use client::EvatrQuery;
pub use codes::MessageCatalog;
pub use params::EvatrFields;
pub use response::{EvatrReply, is_valid_code};

pub(crate) use client::fetch_with;

use crate::core::VerifyError;
use crate::transport::{DEFAULT_TIMEOUT, HttpTransport};

/// Production endpoint of the BZSt confirmation service.
pub const EVATR_RPC_URL: &str = "https://evatr.bff-online.de/evatrRPC";

/// Run a confirmation call against eVatR with the default 30 second timeout
/// and the built-in message catalog.
///
/// This is the low-level call returning eVatR's own reply shape;
/// [`crate::verify::Verifier`] wraps it with the plausibility gate and ID
/// normalization, and lets callers swap the catalog.
///
/// # Errors
///
/// [`VerifyError::Timeout`] and [`VerifyError::Transport`] on network
/// trouble, [`VerifyError::Http`] on non-200 answers,
/// [`VerifyError::EmptyResponseBody`] on empty bodies, and
/// [`VerifyError::MalformedXml`] when the body is not well-formed XML.
pub async fn check(query: &EvatrQuery) -> Result<EvatrReply, VerifyError> {
    let transport = HttpTransport::new(DEFAULT_TIMEOUT)?;
    fetch_with(&transport, EVATR_RPC_URL, query, &MessageCatalog::new()).await
}
