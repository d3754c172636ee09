//! Logging setup

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::{Mutex, Once};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Install the global subscriber. Later calls do nothing.
///
/// Logs go to `log_path` when it can be opened for appending, else to stderr.
/// The filter comes from `RUST_LOG`, defaulting to `clavisnova_tui=info`.
pub fn init(log_path: Option<&Path>) {
    INIT.call_once(|| {
        let (writer, ansi) = match log_path.and_then(open_log_file) {
            Some(file) => (BoxMakeWriter::new(Mutex::new(file)), false),
            None => (BoxMakeWriter::new(io::stderr), true),
        };

        let installed = tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "clavisnova_tui=info".into()),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(ansi),
            )
            .try_init();

        if let Err(err) = installed {
            eprintln!("logging disabled: {err}");
        }
    });
}

fn open_log_file(path: &Path) -> Option<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
