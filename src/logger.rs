use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_LOG_FILE: &str = "flashcard_viewer.log";
pub const DEFAULT_FILTER: &str = "flashcard_viewer=info";

/// Installs the global tracing subscriber, appending to `path`.
///
/// The terminal belongs to the UI, so nothing is written to stdout/stderr.
/// `RUST_LOG` overrides the default filter.
pub fn init(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let installed = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init();

    // Only the first call can install the global subscriber; later calls
    // keep logging through it.
    if let Err(e) = installed {
        tracing::debug!("Log subscriber already installed, ignoring {}: {}", path.display(), e);
    }

    Ok(())
}
