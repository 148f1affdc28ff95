// src/lib.rs

pub mod config;
pub mod error;
pub mod file;
pub mod log;
pub mod lookup;
pub mod net;
pub mod query;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{ConfigError, FetchError, HttpError, WriteError};
pub use file::{write_file, write_file_with, FileSystem, LocalFs};
pub use log::{FileLog, Log, MemoryLog, NullLog, TracingLog};
pub use lookup::BookLookup;
pub use net::{fetch, fetch_tolerant, Transport, UreqTransport};
pub use query::{AuthorQuery, QueryStringUrl, RequestBuilder, RequestParams, UrlBuilder};
