// src/net.rs
// Blocking HTTP GET behind a `Transport` seam, plus the strict and tolerant
// fetch policies built on top of it.

use std::io::Read;
use std::time::Duration;

use crate::error::{FetchError, HttpError};
use crate::log::Log;

/// Opens a URL and returns the raw body bytes.
///
/// Implementations must map every transport-level failure (status, DNS,
/// refused connection, timeout, unreadable body) to `HttpError`.
pub trait Transport {
    fn get(&self, url: &str, timeout: Duration) -> Result<Vec<u8>, HttpError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str, timeout: Duration) -> Result<Vec<u8>, HttpError> {
        (**self).get(url, timeout)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, url: &str, timeout: Duration) -> Result<Vec<u8>, HttpError> {
        (**self).get(url, timeout)
    }
}

/// `ureq` transport. Builds one agent per call so each request gets its own
/// timeout; the response reader is dropped (and the connection released) on
/// every path out of `get`.
#[derive(Clone, Copy, Debug, Default)]
pub struct UreqTransport;

impl Transport for UreqTransport {
    fn get(&self, url: &str, timeout: Duration) -> Result<Vec<u8>, HttpError> {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        let response = match agent.get(url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                return Err(HttpError::status(url, code, response.status_text()));
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(HttpError::transport(url, transport_reason(&transport)));
            }
        };

        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|e| HttpError::transport(url, format!("read body: {e}")))?;
        Ok(body)
    }
}

/// `kind: message: cause`, without the URL that ureq's own `Display` prepends.
fn transport_reason(transport: &ureq::Transport) -> String {
    let mut parts = vec![transport.kind().to_string()];
    if let Some(msg) = transport.message() {
        parts.push(msg.to_string());
    }
    if let Some(cause) = std::error::Error::source(transport) {
        parts.push(cause.to_string());
    }
    parts.join(": ")
}

/// Strict fetch: GET `url`, decode as UTF-8, hand every failure back.
pub fn fetch(transport: &dyn Transport, url: &str, timeout: Duration) -> Result<String, FetchError> {
    let bytes = transport.get(url, timeout)?;
    String::from_utf8(bytes).map_err(|source| FetchError::Decode { url: url.to_string(), source })
}

/// Tolerant fetch: like [`fetch`], but an `HttpError` becomes one error
/// record on `log` and an empty body. Decode failures still propagate.
pub fn fetch_tolerant(
    transport: &dyn Transport,
    log: &dyn Log,
    url: &str,
    timeout: Duration,
) -> Result<String, FetchError> {
    match fetch(transport, url, timeout) {
        Err(FetchError::Http(e)) => {
            log.error(&format!("access error for URL {}: {}", url, e.detail()));
            Ok(String::new())
        }
        other => other,
    }
}
