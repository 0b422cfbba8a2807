//! eVatR request construction and reply handling.

use crate::core::{ValidationService, VerifyError};
use crate::transport::{RawReply, Transport, WireRequest};

use super::codes::MessageCatalog;
use super::params::EvatrFields;
use super::response::{EvatrReply, interpret_fields};

/// Inputs for one confirmation call.
///
/// The endpoint expects all six query keys on every request; fields left at
/// their default go out as empty values, which the service reads as "not
/// queried". Name, city, postal code, and street upgrade the call to a
/// qualified confirmation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvatrQuery {
    /// German VAT ID of the requesting business (`UstId_1`).
    pub own_vat_id: String,
    /// Foreign VAT ID under confirmation (`UstId_2`).
    pub vat_id: String,
    /// Company name of the foreign business (`Firmenname`).
    pub company_name: String,
    /// City (`Ort`).
    pub city: String,
    /// Postal code (`PLZ`).
    pub postal_code: String,
    /// Street and house number (`Strasse`).
    pub street: String,
}

impl EvatrQuery {
    pub(crate) fn to_wire(&self, url: &str) -> WireRequest {
        // The service echoes the query keys back as response field names.
        WireRequest::Get {
            url: url.to_string(),
            query: vec![
                (EvatrFields::UST_ID_1, self.own_vat_id.clone()),
                (EvatrFields::UST_ID_2, self.vat_id.clone()),
                (EvatrFields::FIRMENNAME, self.company_name.clone()),
                (EvatrFields::ORT, self.city.clone()),
                (EvatrFields::PLZ, self.postal_code.clone()),
                (EvatrFields::STRASSE, self.street.clone()),
            ],
        }
    }
}

/// Run one confirmation call over the given transport.
pub(crate) async fn fetch_with<T: Transport>(
    transport: &T,
    url: &str,
    query: &EvatrQuery,
    catalog: &MessageCatalog,
) -> Result<EvatrReply, VerifyError> {
    let reply = transport
        .send(ValidationService::Evatr, query.to_wire(url))
        .await?;
    interpret_reply(reply, catalog)
}

fn interpret_reply(reply: RawReply, catalog: &MessageCatalog) -> Result<EvatrReply, VerifyError> {
    if reply.status != 200 {
        return Err(VerifyError::Http {
            service: ValidationService::Evatr,
            status: reply.status,
            message: reply.body,
        });
    }
    if reply.body.is_empty() {
        return Err(VerifyError::EmptyResponseBody {
            service: ValidationService::Evatr,
        });
    }
    let fields = EvatrFields::parse(&reply.body)?;
    Ok(interpret_fields(&fields, catalog))
}
