use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Build the level filter used by [`init`].
///
/// When debug logging is disabled we force `info` level regardless of the
/// `RUST_LOG` environment variable. This prevents accidental verbose output
/// if the variable happens to be set in the user's environment.
pub fn build_filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    }
}

/// Initialise logging. Output always goes to stderr; when `log_file` is
/// given every event is also appended to that file.
///
/// Calling this more than once is harmless: only the first subscriber is
/// installed.
pub fn init(debug: bool, log_file: Option<&Path>) {
    let file_layer = log_file.and_then(open_log_file).map(|appender| {
        fmt::layer()
            .with_ansi(false)
            .with_writer(appender)
    });

    let _ = tracing_subscriber::registry()
        .with(build_filter(debug))
        .with(fmt::layer())
        .with(file_layer)
        .try_init();
}

fn open_log_file(path: &Path) -> Option<RollingFileAppender> {
    let file_name = path.file_name()?.to_string_lossy().into_owned();
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => std::path::PathBuf::from("."),
    };
    match RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
    {
        Ok(appender) => Some(appender),
        Err(err) => {
            eprintln!("failed to open log file {}: {err}", path.display());
            None
        }
    }
}
