use std::cell::OnceCell;

use reqwest::{header, StatusCode, Url};
use tracing::{debug, trace, warn};

use crate::error::TransportError;

use super::super::protocol::RequestEnvelope;
use super::super::Transport;
use super::connection::{Endpoint, TransportConfig};

/// Longest slice of a response body quoted in an error message.
const MAX_BODY_IN_ERROR: usize = 256;

/// Blocking HTTP transport for a single daemon endpoint.
///
/// The underlying `reqwest` client is built on the first call and reused
/// afterwards. Idle connections are not pooled, so every call opens its own
/// connection and releases it before returning. The lazy cell makes this
/// type `!Sync`; share it across threads only behind a mutex.
pub struct HttpTransport {
    endpoint: Endpoint,
    url: Url,
    config: TransportConfig,
    client: OnceCell<reqwest::blocking::Client>,
}

impl HttpTransport {
    pub fn new(endpoint: Endpoint, config: TransportConfig) -> Result<Self, crate::CoreError> {
        let url = endpoint.url()?;
        Ok(Self {
            endpoint,
            url,
            config,
            client: OnceCell::new(),
        })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    fn client(&self) -> Result<&reqwest::blocking::Client, TransportError> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }

        let mut builder = reqwest::blocking::Client::builder().pool_max_idle_per_host(0);
        if let Some(connect_timeout) = self.config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(timeout) = self.config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        debug!(url = %self.url, "built rpc http client");

        Ok(self.client.get_or_init(|| client))
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &RequestEnvelope) -> Result<serde_json::Value, TransportError> {
        let client = self.client()?;
        debug!(
            rpc.id = %request.id,
            rpc.method = %request.method,
            rpc.params = request.params.len(),
            "rpc call"
        );

        // The daemon accepts `text/plain`; `json()` leaves an explicit
        // content type in place.
        let response = client
            .post(self.url.clone())
            .header(header::CONTENT_TYPE, "text/plain")
            .basic_auth(self.endpoint.login(), Some(self.endpoint.password()))
            .json(request)
            .send()?;
        let status = response.status();

        // Only 200 carries a usable envelope; other 2xx codes are failures too.
        if status != StatusCode::OK {
            warn!(rpc.id = %request.id, rpc.method = %request.method, %status, "rpc http failure");
            // The server's own reason phrase is not exposed by reqwest.
            return Err(TransportError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_owned(),
            });
        }

        let body = response.text()?;
        debug!(
            rpc.id = %request.id,
            rpc.method = %request.method,
            %status,
            body_len = body.len(),
            "rpc response"
        );
        trace!(
            rpc.id = %request.id,
            rpc.method = %request.method,
            body = %body,
            "rpc response body"
        );

        let document: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            TransportError::InvalidBody(format!("{e}; body={}", body_excerpt(&body)))
        })?;
        if !document.is_object() {
            return Err(TransportError::NotAnObject);
        }
        Ok(document)
    }
}

/// The first `MAX_BODY_IN_ERROR` characters of `body`, marked when cut.
fn body_excerpt(body: &str) -> String {
    match body.char_indices().nth(MAX_BODY_IN_ERROR) {
        Some((end, _)) => format!("{}... ({} bytes total)", &body[..end], body.len()),
        None => body.to_owned(),
    }
}
