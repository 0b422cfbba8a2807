//! Verification orchestrator.
//!
//! [`Verifier`] is the one entry point over both backends: it gates the raw
//! tax ID, picks the split policy the chosen service expects, runs the call,
//! and folds the backend's reply into a [`VerificationResult`]. The HTTP
//! client is built once and reused across calls.
//!
//! # Example
//!
//! ```ignore
//! use ustid::VerificationRequest;
//! use ustid::verify::Verifier;
//!
//! let verifier = Verifier::new()?;
//!
//! let result = verifier
//!     .verify(&VerificationRequest::vies("DE129273398").adopt_address(true))
//!     .await?;
//! if let Some(addr) = &result.structured_address {
//!     println!("{} {} ({})", addr.postal_code, addr.locality, addr.country_locode);
//! }
//! ```

use std::time::Duration;

use crate::core::{
    ValidationService, VatId, VerificationRequest, VerificationResult, VerifyError,
    require_plausible,
};
use crate::transport::{DEFAULT_TIMEOUT, HttpTransport, Transport};

#[cfg(feature = "vies")]
use crate::core::decompose_address;

#[cfg(feature = "evatr")]
use crate::evatr::{EvatrQuery, MessageCatalog};

/// Settings for a [`Verifier`].
///
/// The defaults point at the production endpoints with a 30 second timeout.
/// Endpoint overrides exist for proxies and test doubles; the message
/// catalog localizes eVatR diagnostics.
#[derive(Debug, Clone)]
pub struct VerifierConfig {
    /// Per-request timeout, both backends.
    pub timeout: Duration,
    /// VIES check-vat-number endpoint.
    #[cfg(feature = "vies")]
    pub vies_endpoint: String,
    /// eVatR RPC endpoint.
    #[cfg(feature = "evatr")]
    pub evatr_endpoint: String,
    /// Texts for eVatR status codes and match indicators.
    #[cfg(feature = "evatr")]
    pub catalog: MessageCatalog,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            #[cfg(feature = "vies")]
            vies_endpoint: crate::vies::CHECK_VAT_URL.to_string(),
            #[cfg(feature = "evatr")]
            evatr_endpoint: crate::evatr::EVATR_RPC_URL.to_string(),
            #[cfg(feature = "evatr")]
            catalog: MessageCatalog::new(),
        }
    }
}

/// Verifies VAT IDs against the enabled backend services.
#[derive(Debug, Clone)]
pub struct Verifier {
    transport: HttpTransport,
    config: VerifierConfig,
}

impl Verifier {
    /// Verifier with the default configuration.
    pub fn new() -> Result<Self, VerifyError> {
        Self::with_config(VerifierConfig::default())
    }

    /// Verifier with custom endpoints, timeout, or catalog.
    pub fn with_config(config: VerifierConfig) -> Result<Self, VerifyError> {
        let transport = HttpTransport::new(config.timeout)?;
        Ok(Self { transport, config })
    }

    /// Run one verification call.
    ///
    /// Safe to repeat: verification reads remote state and never changes it,
    /// so the same request yields the same result while the registries hold
    /// still.
    ///
    /// # Errors
    ///
    /// [`VerifyError::InvalidTaxId`] before any network traffic when the raw
    /// ID is implausibly short; otherwise whatever the backend call surfaces
    /// ([`VerifyError::Timeout`], [`VerifyError::Http`], and friends).
    /// [`VerifyError::MalformedAddressLine`] when address adoption was
    /// requested and the returned address does not decompose.
    pub async fn verify(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationResult, VerifyError> {
        verify_with(&self.transport, &self.config, request).await
    }
}

/// Orchestration over an abstract transport, so tests run without sockets.
async fn verify_with<T: Transport>(
    transport: &T,
    config: &VerifierConfig,
    request: &VerificationRequest,
) -> Result<VerificationResult, VerifyError> {
    require_plausible(&request.tax_id)?;

    match request.service {
        #[cfg(feature = "vies")]
        ValidationService::Vies => {
            let id = VatId::split_lenient(&request.tax_id, &request.requester_country);
            let reply = crate::vies::fetch_with(
                transport,
                &config.vies_endpoint,
                id.country_code.as_deref().unwrap_or_default(),
                &id.number,
            )
            .await?;

            let mut result = VerificationResult {
                valid: reply.valid,
                ..VerificationResult::default()
            };
            if reply.valid {
                result.matched_name = reply.name;
                result.matched_address = reply.address;
                if request.adopt_address {
                    if let Some(address) = &result.matched_address {
                        result.structured_address = decompose_address(address)?;
                    }
                }
            }
            Ok(result)
        }
        #[cfg(feature = "evatr")]
        ValidationService::Evatr => {
            // eVatR compares against the full prefixed ID, so the strict
            // split round-trips the input verbatim.
            let id = VatId::split_strict(&request.tax_id);
            let query = EvatrQuery {
                own_vat_id: request.own_vat_id.clone(),
                vat_id: id.prefixed(),
                company_name: request.company_name.clone(),
                city: request.city.clone().unwrap_or_default(),
                postal_code: request.postal_code.clone().unwrap_or_default(),
                street: request.street.clone().unwrap_or_default(),
            };
            let reply =
                crate::evatr::fetch_with(transport, &config.evatr_endpoint, &query, &config.catalog)
                    .await?;

            // eVatR reports match indicators instead of registered data, so
            // the name/address slots stay empty.
            Ok(VerificationResult {
                valid: reply.valid,
                diagnostics: reply.diagnostics,
                error_code: reply.error_code,
                ..VerificationResult::default()
            })
        }
        #[cfg(not(all(feature = "vies", feature = "evatr")))]
        service => Err(VerifyError::ServiceDisabled(service)),
    }
}
