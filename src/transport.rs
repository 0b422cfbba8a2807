//! HTTP transport shared by the backend clients.
//!
//! The clients describe what to send as a [`WireRequest`]; the transport owns
//! the pooled HTTP client, the timeout, and the mapping of network failures
//! onto [`VerifyError`]. Tests swap in stub transports through the
//! [`Transport`] trait.

use std::time::Duration;

use crate::core::{ValidationService, VerifyError};

/// Default request timeout. Both backends occasionally take tens of seconds
/// when a member state is slow to answer.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A wire request one of the backends wants sent.
#[derive(Debug, Clone)]
pub(crate) enum WireRequest {
    /// JSON POST (VIES).
    #[cfg(feature = "vies")]
    PostJson {
        url: String,
        body: serde_json::Value,
    },
    /// GET with query parameters (eVatR). Every key is sent even when its
    /// value is empty.
    #[cfg(feature = "evatr")]
    Get {
        url: String,
        query: Vec<(&'static str, String)>,
    },
}

/// Raw reply as received: status plus body text, no interpretation.
#[derive(Debug, Clone)]
pub(crate) struct RawReply {
    pub(crate) status: u16,
    pub(crate) body: String,
}

/// Seam between the orchestrator and the network.
pub(crate) trait Transport {
    async fn send(
        &self,
        service: ValidationService,
        request: WireRequest,
    ) -> Result<RawReply, VerifyError>;
}

/// Production transport over one pooled `reqwest::Client`.
///
/// One instance per [`crate::verify::Verifier`], reused across calls for
/// connection pooling. Both backends are rate-limited public services, so
/// every request carries the configured timeout.
#[derive(Debug, Clone)]
pub(crate) struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub(crate) fn new(timeout: Duration) -> Result<Self, VerifyError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| VerifyError::ClientSetup(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn send(
        &self,
        service: ValidationService,
        request: WireRequest,
    ) -> Result<RawReply, VerifyError> {
        let builder = match request {
            #[cfg(feature = "vies")]
            WireRequest::PostJson { url, body } => self
                .client
                .post(url)
                .header(reqwest::header::ACCEPT, "application/json")
                .json(&body),
            #[cfg(feature = "evatr")]
            WireRequest::Get { url, query } => self.client.get(url).query(&query),
        };

        let resp = builder.send().await.map_err(|e| classify(service, e))?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| classify(service, e))?;
        Ok(RawReply { status, body })
    }
}

fn classify(service: ValidationService, err: reqwest::Error) -> VerifyError {
    if err.is_timeout() {
        VerifyError::Timeout { service }
    } else {
        VerifyError::Transport {
            service,
            message: err.to_string(),
        }
    }
}
