use std::fs::{self, File};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_DIRECTIVE: &str = "paydesk=info";
const QUIET_DIRECTIVE: &str = "paydesk=error";

fn env_filter(quiet: bool) -> EnvFilter {
    let directive = if quiet {
        QUIET_DIRECTIVE
    } else {
        DEFAULT_DIRECTIVE
    };
    // Both directives are compile-time constants, so parsing cannot fail.
    EnvFilter::from_default_env().add_directive(directive.parse().expect("Invalid log directive"))
}

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted (default).
pub fn init_logging(quiet: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(env_filter(quiet))
        .init();
}

/// Initialize logging into a file instead of stderr.
///
/// Used by the terminal dashboard, where anything written to stderr would
/// land on top of the rendered screen. Parent directories are created.
pub fn init_file_logging(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::options().create(true).append(true).open(path)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(env_filter(false))
        .init();

    Ok(())
}
