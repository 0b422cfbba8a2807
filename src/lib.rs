//! # ustid
//!
//! EU VAT ID verification for German businesses: the EU VIES REST API and the
//! German BZSt eVatR confirmation service behind one canonical result type.
//!
//! Both services answer the same question (is this VAT ID valid, and does it
//! belong to this name and address?) in mutually incompatible wire formats:
//! VIES speaks JSON over REST, eVatR a legacy RPC-over-XML protocol driven by
//! GET parameters. This crate normalizes the identifier, speaks both
//! protocols, and folds the answers into a single [`VerificationResult`].
//!
//! ## Quick Start
//!
//! ```rust
//! use ustid::{decompose_address, require_plausible, VatId};
//!
//! // Reject implausible identifiers before any network traffic.
//! assert!(require_plausible("DE129273398").is_ok());
//! assert!(require_plausible("DE1").is_err());
//!
//! // Country prefix and local number.
//! let id = VatId::split_lenient("DE129273398", "DE");
//! assert_eq!(id.country_code.as_deref(), Some("DE"));
//! assert_eq!(id.number, "129273398");
//!
//! // Free-text backend addresses into structured fields.
//! let addr = decompose_address("Marienplatz 1\n80331 München DE")
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(addr.street, "Marienplatz 1");
//! assert_eq!(addr.postal_code, "80331");
//! assert_eq!(addr.locality, "München");
//! assert_eq!(addr.country_locode, "DE");
//! ```
//!
//! ## Verifying against a live backend
//!
//! ```ignore
//! use ustid::VerificationRequest;
//! use ustid::verify::Verifier;
//!
//! let verifier = Verifier::new()?;
//! let result = verifier.verify(&VerificationRequest::vies("DE129273398")).await?;
//! println!("valid: {}", result.valid);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Tax ID splitting, address decomposition, result model |
//! | `vies` | EU VIES REST API client |
//! | `evatr` | German BZSt eVatR client |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(any(feature = "vies", feature = "evatr"))]
mod transport;

#[cfg(feature = "vies")]
pub mod vies;

#[cfg(feature = "evatr")]
pub mod evatr;

#[cfg(any(feature = "vies", feature = "evatr"))]
pub mod verify;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
