// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "http://buscador";
pub const TIMEOUT_SECS: u64 = 10;

// Query
pub const AUTHOR_PARAM: &str = "autor";

// Local files
pub const DEFAULT_CONFIG_FILE: &str = "book_lookup.cfg";
pub const DEFAULT_LOG_FILE: &str = ".store/debug.log";
