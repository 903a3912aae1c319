//! The network seam between `BookClient` and the outside world.
//!
//! A `Transport` takes an `HttpRequest` and resolves to the matching
//! `HttpResponse`. Statuses are never interpreted here: a 404 or a 500 is a
//! successful round trip as far as the transport is concerned. Only a failure
//! to complete the exchange at all is a `TransportError`.

use std::future::Future;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP round trip.
pub trait Transport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// `ureq` agent driven from a blocking worker thread.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        // Status codes are data for the client to interpret, not errors.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || send_blocking(&agent, request))
            .await
            .map_err(|e| TransportError::new(format!("transport worker failed: {e}")))?
    }
}

fn send_blocking(agent: &ureq::Agent, req: HttpRequest) -> Result<HttpResponse, TransportError> {
    let content_type = req
        .headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
        .map(|(_, value)| value.clone())
        .unwrap_or_else(|| "application/json".to_string());

    let result = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.path)
            .content_type(content_type.as_str())
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => agent
            .put(&req.path)
            .content_type(content_type.as_str())
            .send(body.as_bytes()),
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    };
    let mut response = result.map_err(|e| TransportError::new(e.to_string()))?;

    let status = response.status();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| TransportError::new(e.to_string()))?;

    Ok(HttpResponse {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        headers,
        body,
    })
}
