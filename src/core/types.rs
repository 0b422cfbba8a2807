use serde::{Deserialize, Serialize};

use super::address::StructuredAddress;

/// Which government service answers a verification call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationService {
    /// EU VAT Information Exchange System (JSON REST API).
    Vies,
    /// German BZSt confirmation service (RPC-over-XML via GET).
    Evatr,
}

impl std::fmt::Display for ValidationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vies => write!(f, "VIES"),
            Self::Evatr => write!(f, "eVatR"),
        }
    }
}

/// Input for one verification call.
///
/// Construct with [`VerificationRequest::vies`] or
/// [`VerificationRequest::evatr`], then refine with the fluent setters.
/// Everything beyond the tax ID is context: the requester's own data for
/// eVatR's qualified confirmation, the fallback country for VIES, and the
/// address-adoption flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequest {
    /// Backend to query.
    pub service: ValidationService,
    /// Raw tax ID as entered, e.g. "DE129273398". Not yet normalized.
    pub tax_id: String,
    /// Country code used when the tax ID carries no alphabetic prefix (VIES).
    pub requester_country: String,
    /// Requester's own VAT ID (`UstId_1`). Required by eVatR.
    pub own_vat_id: String,
    /// Partner company name (`Firmenname`). Required by eVatR.
    pub company_name: String,
    /// Partner city for the qualified confirmation (`Ort`).
    pub city: Option<String>,
    /// Partner postal code for the qualified confirmation (`PLZ`).
    pub postal_code: Option<String>,
    /// Partner street for the qualified confirmation (`Strasse`).
    pub street: Option<String>,
    /// Decompose a matched address into a [`StructuredAddress`].
    /// When false the raw matched address is still returned as-is.
    pub adopt_address: bool,
}

impl VerificationRequest {
    /// Request against VIES. The requester country defaults to "DE".
    pub fn vies(tax_id: impl Into<String>) -> Self {
        Self {
            service: ValidationService::Vies,
            tax_id: tax_id.into(),
            requester_country: "DE".into(),
            own_vat_id: String::new(),
            company_name: String::new(),
            city: None,
            postal_code: None,
            street: None,
            adopt_address: false,
        }
    }

    /// Request against eVatR. BZSt requires the requester's own German VAT ID
    /// and the partner's company name for every confirmation.
    pub fn evatr(
        tax_id: impl Into<String>,
        own_vat_id: impl Into<String>,
        company_name: impl Into<String>,
    ) -> Self {
        Self {
            service: ValidationService::Evatr,
            tax_id: tax_id.into(),
            requester_country: "DE".into(),
            own_vat_id: own_vat_id.into(),
            company_name: company_name.into(),
            city: None,
            postal_code: None,
            street: None,
            adopt_address: false,
        }
    }

    /// Fallback country for tax IDs without an alphabetic prefix.
    pub fn requester_country(mut self, country: impl Into<String>) -> Self {
        self.requester_country = country.into();
        self
    }

    /// Partner city, enabling eVatR's `Erg_Ort` comparison.
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Partner postal code, enabling eVatR's `Erg_PLZ` comparison.
    pub fn postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    /// Partner street, enabling eVatR's `Erg_Str` comparison.
    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    /// Request decomposition of a matched address into structured fields.
    pub fn adopt_address(mut self, adopt: bool) -> Self {
        self.adopt_address = adopt;
        self
    }
}

/// Canonical outcome of a verification call, independent of backend.
///
/// `matched_name`, `matched_address`, and `structured_address` are only
/// populated when `valid` is true.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Whether the backend confirmed the tax ID as valid.
    pub valid: bool,
    /// Registered legal name, when the backend disclosed one.
    pub matched_name: Option<String>,
    /// Registered address as raw free text, when disclosed.
    pub matched_address: Option<String>,
    /// Decomposed form of `matched_address`, when requested and parseable.
    pub structured_address: Option<StructuredAddress>,
    /// Ordered human-readable lines describing the outcome (eVatR only).
    pub diagnostics: Vec<String>,
    /// Backend status code, e.g. eVatR's `ErrorCode`.
    pub error_code: Option<String>,
}
