// src/lookup.rs
//! Author lookup pipeline.
//!
//! ```text
//! consult(author) → build_request(author) → build_url(base, params) → fetch(url) → body
//! ```
//!
//! Every collaborator is a trait object owned by [`BookLookup`]. The defaults
//! talk to the real endpoint; `with_*` swaps any of them out.

use std::time::Duration;

use crate::config::options::LookupOptions;
use crate::error::FetchError;
use crate::log::{Log, TracingLog};
use crate::net::{self, Transport, UreqTransport};
use crate::query::{AuthorQuery, QueryStringUrl, RequestBuilder, UrlBuilder};

pub struct BookLookup {
    options: LookupOptions,
    requests: Box<dyn RequestBuilder>,
    urls: Box<dyn UrlBuilder>,
    transport: Box<dyn Transport>,
    log: Box<dyn Log>,
}

impl Default for BookLookup {
    fn default() -> Self {
        Self::new(LookupOptions::default())
    }
}

impl BookLookup {
    pub fn new(options: LookupOptions) -> Self {
        Self {
            options,
            requests: Box::new(AuthorQuery::default()),
            urls: Box::new(QueryStringUrl),
            transport: Box::new(UreqTransport),
            log: Box::new(TracingLog),
        }
    }

    pub fn with_request_builder(mut self, requests: impl RequestBuilder + 'static) -> Self {
        self.requests = Box::new(requests);
        self
    }

    pub fn with_url_builder(mut self, urls: impl UrlBuilder + 'static) -> Self {
        self.urls = Box::new(urls);
        self
    }

    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Box::new(transport);
        self
    }

    pub fn with_log(mut self, log: impl Log + 'static) -> Self {
        self.log = Box::new(log);
        self
    }

    pub fn options(&self) -> &LookupOptions {
        &self.options
    }

    pub fn base_url(&self) -> &str {
        &self.options.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.options.timeout
    }

    /// Query URL for `author`, built but not fetched.
    pub fn url_for(&self, author: &str) -> String {
        let params = self.requests.build_request(author);
        self.urls.build_url(&self.options.base_url, &params)
    }

    /// Look up `author` and return the raw response body. Errors from any
    /// step come back untouched.
    pub fn consult(&self, author: &str) -> Result<String, FetchError> {
        let url = self.url_for(author);
        tracing::debug!("GET {url}");
        self.fetch(&url)
    }

    /// [`consult`](Self::consult) with the tolerant fetch: an HTTP failure is
    /// logged and yields an empty body.
    pub fn consult_tolerant(&self, author: &str) -> Result<String, FetchError> {
        let url = self.url_for(author);
        tracing::debug!("GET {url} (tolerant)");
        self.fetch_tolerant(&url)
    }

    /// Run whichever variant `options.tolerant` selects.
    pub fn run(&self, author: &str) -> Result<String, FetchError> {
        if self.options.tolerant {
            self.consult_tolerant(author)
        } else {
            self.consult(author)
        }
    }

    pub fn fetch(&self, url: &str) -> Result<String, FetchError> {
        net::fetch(self.transport.as_ref(), url, self.options.timeout)
    }

    pub fn fetch_tolerant(&self, url: &str) -> Result<String, FetchError> {
        net::fetch_tolerant(self.transport.as_ref(), self.log.as_ref(), url, self.options.timeout)
    }
}
