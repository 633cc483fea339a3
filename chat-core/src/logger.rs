//! Tracing setup for the assistant: every event goes to the log file, the console only gets
//! events at or above a configurable level so an interactive chat is not drowned in spans.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::level_filters::LevelFilter;
use tracing::Metadata;
use tracing_subscriber::{
    fmt::{format::FmtSpan, writer::MakeWriterExt},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Whether an event at `meta`'s level reaches the console under `console_level`.
fn console_accepts(meta: &Metadata<'_>, console_level: LevelFilter) -> bool {
    *meta.level() <= console_level
}

fn open_log_file(log_file_path: &str) -> io::Result<fs::File> {
    if let Some(dir) = Path::new(log_file_path).parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
}

/// Installs the global subscriber.
///
/// RUST_LOG (default `info`) decides what is recorded at all; `console_level` further limits
/// what is echoed to stdout (`LevelFilter::OFF` keeps the console silent). Load `.env` first.
pub fn init_tracing(log_file_path: &str, console_level: LevelFilter) -> anyhow::Result<()> {
    let file = Arc::new(open_log_file(log_file_path)?);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console =
        io::stdout.with_filter(move |meta: &Metadata<'_>| console_accepts(meta, console_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(console.and(file))
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(false)
        .with_line_number(false);

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}
