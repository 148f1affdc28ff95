// src/cli.rs
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use crate::config::{self, consts::{DEFAULT_CONFIG_FILE, DEFAULT_LOG_FILE}, AppOptions};
use crate::file::write_file;
use crate::log::{FileLog, Log, TracingLog};
use crate::lookup::BookLookup;

/// Look up books by author and print (or store) the raw search response.
#[derive(Debug, Parser)]
#[command(name = "cli", version, about)]
pub struct Args {
    /// Author to search for
    pub author: String,

    /// Search endpoint the query string is appended to
    #[arg(long, value_name = "URL")]
    pub base: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Log HTTP failures and print an empty body instead of failing
    #[arg(long)]
    pub tolerant: bool,

    /// Write the body to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Append error records to this file instead of stderr
    /// (bare `--log-file` means `.store/debug.log`)
    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = DEFAULT_LOG_FILE,
    )]
    pub log_file: Option<PathBuf>,

    /// Options file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Write the effective options back to the options file
    #[arg(long)]
    pub save_config: bool,
}

/// Defaults < options file < flags.
pub fn resolve_options(args: &Args) -> Result<AppOptions> {
    let mut opts = config::file::load(&args.config)
        .wrap_err_with(|| format!("loading {}", args.config.display()))?;

    if let Some(base) = &args.base {
        opts.lookup.base_url = base.clone();
    }
    if let Some(secs) = args.timeout {
        opts.lookup.timeout = Duration::from_secs(secs);
    }
    if args.tolerant {
        opts.lookup.tolerant = true;
    }
    if let Some(out) = &args.out {
        opts.output.out_path = Some(out.clone());
    }
    if let Some(log_file) = &args.log_file {
        opts.output.log_file = Some(log_file.clone());
    }
    Ok(opts)
}

pub fn run(args: Args) -> Result<()> {
    let opts = resolve_options(&args)?;

    if args.save_config {
        config::file::save(&args.config, &opts)?;
    }

    let log = log_sink(&opts);

    let lookup = BookLookup::new(opts.lookup.clone()).with_log(Arc::clone(&log));
    let body = lookup.run(&args.author)?;

    match &opts.output.out_path {
        Some(path) => write_file(path, &body, log.as_ref()),
        None => print!("{body}"),
    }
    Ok(())
}

/// Error records go to `--log-file` when given, tracing otherwise.
fn log_sink(opts: &AppOptions) -> Arc<dyn Log> {
    match &opts.output.log_file {
        Some(path) => Arc::new(FileLog::new(path)),
        None => Arc::new(TracingLog),
    }
}
