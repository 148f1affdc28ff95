// src/error.rs
//! Error types for fetching and writing.
//!
//! Two policies share these types:
//! - strict callers (`net::fetch`, `BookLookup::consult`) hand every error back;
//! - tolerant callers (`net::fetch_tolerant`, `file::write_file`) catch only
//!   the kinds named here, log them, and fall back.

use std::{io, path::PathBuf, string::FromUtf8Error};
use thiserror::Error;

/// Transport-level failure: bad status, DNS, refused connection, timeout,
/// invalid URL or a body that could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("access error fetching {url}: {}", describe(.status, .reason))]
pub struct HttpError {
    pub url: String,
    /// HTTP status when the server answered; `None` when it never did.
    pub status: Option<u16>,
    pub reason: String,
}

impl HttpError {
    pub fn status(url: &str, code: u16, reason: impl Into<String>) -> Self {
        Self { url: url.to_string(), status: Some(code), reason: reason.into() }
    }

    pub fn transport(url: &str, reason: impl Into<String>) -> Self {
        Self { url: url.to_string(), status: None, reason: reason.into() }
    }

    /// "HTTP 404 Not Found" or the bare transport reason.
    pub fn detail(&self) -> String {
        describe(&self.status, &self.reason)
    }
}

fn describe(status: &Option<u16>, reason: &str) -> String {
    match status {
        Some(code) => format!("HTTP {code} {reason}"),
        None => reason.to_string(),
    }
}

/// Everything the strict fetch path can return.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("response from {url} is not valid UTF-8")]
    Decode {
        url: String,
        #[source]
        source: FromUtf8Error,
    },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::Http(e) => &e.url,
            FetchError::Decode { url, .. } => url,
        }
    }
}

/// One of the two stages of `file::write_file` failing.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("could not create directory {dir}: {source}")]
    CreateDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not create file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Options file problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read options file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write options file {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: invalid value for `{key}`: {value:?}")]
    Value { line: usize, key: String, value: String },
}
