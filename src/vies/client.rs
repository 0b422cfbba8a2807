//! VIES request construction and the fetch path.

use serde_json::json;

use crate::core::{ValidationService, VerifyError};
use crate::transport::{Transport, WireRequest};

use super::response::{ViesReply, interpret_reply};

/// Build the JSON POST for a check-vat-number call.
///
/// The wire contract wants an uppercase 2-letter country code; the number
/// travels verbatim.
pub(crate) fn build_check_request(url: &str, country_code: &str, vat_number: &str) -> WireRequest {
    WireRequest::PostJson {
        url: url.to_string(),
        body: json!({
            "countryCode": country_code.to_uppercase(),
            "vatNumber": vat_number,
        }),
    }
}

/// One outbound call: build, send, interpret.
///
/// Idempotent from the caller's perspective; repeating the call re-validates
/// and mutates no remote state.
pub(crate) async fn fetch_with<T: Transport>(
    transport: &T,
    url: &str,
    country_code: &str,
    vat_number: &str,
) -> Result<ViesReply, VerifyError> {
    let request = build_check_request(url, country_code, vat_number);
    let reply = transport.send(ValidationService::Vies, request).await?;
    interpret_reply(reply.status, &reply.body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vies::CHECK_VAT_URL;

    #[test]
    fn request_uppercases_country() {
        match build_check_request(CHECK_VAT_URL, "de", "129273398") {
            WireRequest::PostJson { url, body } => {
                assert_eq!(url, CHECK_VAT_URL);
                assert_eq!(body["countryCode"], "DE");
                assert_eq!(body["vatNumber"], "129273398");
            }
            #[cfg(feature = "evatr")]
            other => panic!("unexpected request kind: {other:?}"),
        }
    }

    #[test]
    fn request_serializes_to_wire_names() {
        match build_check_request(CHECK_VAT_URL, "DE", "129273398") {
            WireRequest::PostJson { body, .. } => {
                let json = serde_json::to_string(&body).unwrap();
                assert!(json.contains("\"countryCode\":\"DE\""));
                assert!(json.contains("\"vatNumber\":\"129273398\""));
            }
            #[cfg(feature = "evatr")]
            other => panic!("unexpected request kind: {other:?}"),
        }
    }
}
