//! Logging init: file under XDG state dir, or fallback to stderr.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,pangzhan=debug";
/// Default filter for the stderr fallback.
const STDERR_FILTER: &str = "warn";

/// Writer that is either the log file or stderr (when the handle can't be cloned).
enum FileOrStderr {
    File(fs::File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct FileMakeWriter(fs::File);

impl<'a> MakeWriter<'a> for FileMakeWriter {
    type Writer = FileOrStderr;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(FileOrStderr::File)
            .unwrap_or(FileOrStderr::Stderr)
    }
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initialize structured logging to `~/.local/state/pangzhan/pangzhan.log`.
/// Returns Err if the log file can't be opened so the caller can fall back
/// to [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pangzhan")?;
    let log_dir = xdg_dirs.get_state_home().join("pangzhan");

    fs::create_dir_all(&log_dir)?;
    let log_file_path: PathBuf = log_dir.join("pangzhan.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(DEFAULT_FILTER))
        .with_writer(BoxMakeWriter::new(FileMakeWriter(file)))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    tracing::info!("pangzhan logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Initialize logging to stderr only, at [`STDERR_FILTER`] unless `RUST_LOG`
/// is set.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(STDERR_FILTER))
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn default_filters() {
        assert_eq!(
            EnvFilter::new(DEFAULT_FILTER).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            EnvFilter::new(STDERR_FILTER).max_level_hint(),
            Some(LevelFilter::WARN)
        );
    }
}
