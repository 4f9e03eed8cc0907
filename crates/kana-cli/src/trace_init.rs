//! Optional JSONL trace log for `kanatool`.

use std::path::Path;

/// File name written inside the `--log-dir` directory.
pub const LOG_FILE: &str = "kanatool-trace.jsonl";

#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "kana_core=debug";

/// Keeps the background log writer alive. Dropping it flushes pending lines.
#[must_use]
pub struct TraceGuard {
    #[cfg(feature = "trace")]
    _worker: tracing_appender::non_blocking::WorkerGuard,
}

/// Install a JSON subscriber writing to `log_dir/kanatool-trace.jsonl`.
///
/// `RUST_LOG` overrides the default `kana_core=debug` filter. Failures are
/// reported on stderr and leave tracing disabled.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> Option<TraceGuard> {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    if let Err(e) = std::fs::create_dir_all(log_dir) {
        eprintln!("warning: cannot create {}: {e}", log_dir.display());
        return None;
    }
    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (writer, worker) = tracing_appender::non_blocking(appender);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match tracing_subscriber::fmt()
        .json()
        .with_writer(writer)
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(filter)
        .try_init()
    {
        Ok(()) => Some(TraceGuard { _worker: worker }),
        Err(e) => {
            eprintln!("warning: tracing not installed: {e}");
            None
        }
    }
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> Option<TraceGuard> {
    None
}
