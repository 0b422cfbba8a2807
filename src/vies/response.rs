//! VIES reply interpretation.

use serde::{Deserialize, Serialize};

use crate::core::{ValidationService, VerifyError};

const SERVICE: ValidationService = ValidationService::Vies;

/// Interpreted VIES reply for one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViesReply {
    /// Whether VIES confirmed the VAT number as valid.
    pub valid: bool,
    /// Registered name. `None` when invalid, withheld ("---"), or empty.
    pub name: Option<String>,
    /// Registered address as raw free text; same absence rules as `name`.
    pub address: Option<String>,
    /// Date of the request as reported by VIES (YYYY-MM-DD).
    pub request_date: Option<String>,
}

/// VIES wire shape. Error wrappers stay untyped so one malformed element
/// cannot poison the extraction of its neighbours.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireReply {
    valid: Option<bool>,
    request_date: Option<String>,
    name: Option<String>,
    address: Option<String>,
    error_wrappers: Option<Vec<serde_json::Value>>,
}

/// Interpret status and body of a check-vat-number call.
///
/// - Empty body: [`VerifyError::EmptyResponseBody`], never retried.
/// - Status ≠ 200: [`VerifyError::Http`] carrying the concatenated
///   `errorWrappers` texts.
/// - Status 200 without a boolean `valid` key, or claiming valid without a
///   `name` key: [`VerifyError::UnexpectedResponse`], same text extraction.
/// - Otherwise the reply; name and address are only carried for valid IDs
///   and the `"---"` placeholder is normalized to `None`.
pub(crate) fn interpret_reply(status: u16, body: &str) -> Result<ViesReply, VerifyError> {
    if body.is_empty() {
        return Err(VerifyError::EmptyResponseBody { service: SERVICE });
    }

    // An unparseable body reads as a reply with no keys at all.
    let mut wire: WireReply = serde_json::from_str(body).unwrap_or_default();

    if status != 200 {
        return Err(VerifyError::Http {
            service: SERVICE,
            status,
            message: wrapper_text(&wire),
        });
    }

    let Some(valid) = wire.valid else {
        return Err(VerifyError::UnexpectedResponse {
            service: SERVICE,
            message: wrapper_text(&wire),
        });
    };

    let (name, address) = if valid {
        // A success body for a valid ID always carries the name key, even
        // when the member state withholds the value.
        let Some(name) = wire.name.take() else {
            return Err(VerifyError::UnexpectedResponse {
                service: SERVICE,
                message: wrapper_text(&wire),
            });
        };
        (
            Some(name).filter(|n| n != "---" && !n.is_empty()),
            wire.address.filter(|a| a != "---" && !a.is_empty()),
        )
    } else {
        (None, None)
    };

    Ok(ViesReply {
        valid,
        name,
        address,
        request_date: wire.request_date,
    })
}

/// Concatenate `errorWrappers` texts in array order, without separator.
/// Each element contributes its `message` string if present, else its
/// `error` string; elements with neither are skipped.
fn wrapper_text(wire: &WireReply) -> String {
    wire.error_wrappers
        .iter()
        .flatten()
        .filter_map(|w| {
            w.get("message")
                .and_then(|v| v.as_str())
                .or_else(|| w.get("error").and_then(|v| v.as_str()))
        })
        .collect()
}
