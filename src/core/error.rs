use thiserror::Error;

use crate::core::ValidationService;

/// Errors that can occur during a verification call.
///
/// Every variant carries enough context to log or display without access to
/// the original request. None of these are retried internally; a failed call
/// must be re-issued by the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum VerifyError {
    /// The raw tax ID fails the plausibility gate (empty or too short).
    /// Raised before any network call is attempted.
    #[error("invalid tax ID: {0:?}")]
    InvalidTaxId(String),

    /// The backend answered with an empty body.
    #[error("{service} returned an empty response body")]
    EmptyResponseBody {
        /// Which backend answered.
        service: ValidationService,
    },

    /// The backend answered 200 but the body is missing required fields
    /// or is not parseable at all.
    #[error("unexpected {service} response shape: {message}")]
    UnexpectedResponse {
        /// Which backend answered.
        service: ValidationService,
        /// Extracted backend error text, possibly empty.
        message: String,
    },

    /// The backend answered with a non-200 HTTP status.
    #[error("{service} HTTP {status}: {message}")]
    Http {
        /// Which backend answered.
        service: ValidationService,
        /// HTTP status code.
        status: u16,
        /// Extracted backend error text, possibly empty.
        message: String,
    },

    /// The request exceeded the configured timeout.
    #[error("{service} request timed out")]
    Timeout {
        /// Which backend was called.
        service: ValidationService,
    },

    /// DNS, connection, or TLS failure before a response arrived.
    #[error("{service} transport failure: {message}")]
    Transport {
        /// Which backend was called.
        service: ValidationService,
        /// Underlying transport error text.
        message: String,
    },

    /// The eVatR response is not well-formed XML.
    #[error("malformed XML: {0}")]
    MalformedXml(String),

    /// The second address line is too short for the fixed-offset layout.
    #[error("malformed address line: {0:?}")]
    MalformedAddressLine(String),

    /// The HTTP client could not be constructed.
    #[error("client setup failed: {0}")]
    ClientSetup(String),

    /// The requested backend is not compiled into this build.
    #[error("{0} support is not enabled in this build")]
    ServiceDisabled(ValidationService),
}
