//! Logger setup: stderr plus a plain-text log file.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::error::CliError;

/// Writes every record to stderr and, when open, to the log file with ANSI
/// escapes removed.
struct TeeWriter {
    file: Option<File>,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        if let Some(file) = self.file.as_mut() {
            file.write_all(&strip_ansi_escapes::strip(buf))?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}

/// Effective level from the configured one and the CLI switches.
pub(crate) fn effective_level(configured: LevelFilter, verbose: bool, quiet: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        configured.min(LevelFilter::Warn)
    } else {
        configured
    }
}

/// Install the global logger. The log file is appended to; if it cannot be
/// opened, logging continues on stderr only.
pub(crate) fn init(level: LevelFilter, log_path: &Path) -> Result<(), CliError> {
    let (file, open_error) = match open_log_file(log_path) {
        Ok(file) => (Some(file), None),
        Err(e) => (None, Some(e)),
    };

    Builder::new()
        .filter_level(level)
        .format_timestamp_secs()
        .format_target(false)
        .target(Target::Pipe(Box::new(TeeWriter { file })))
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))?;

    if let Some(e) = open_error {
        log::warn!("Cannot open log file {}: {e}", log_path.display());
    }
    Ok(())
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_level() {
        assert_eq!(effective_level(LevelFilter::Error, true, false), LevelFilter::Debug);
        assert_eq!(effective_level(LevelFilter::Info, false, true), LevelFilter::Warn);
        assert_eq!(effective_level(LevelFilter::Error, false, true), LevelFilter::Error);
        assert_eq!(effective_level(LevelFilter::Info, false, false), LevelFilter::Info);
    }
}
