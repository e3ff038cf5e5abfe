use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use env_logger::{Builder, Target};

/// Flushes the installed logger when dropped, so the log file is complete
/// whichever way the process leaves `main`.
#[must_use]
pub struct LogGuard(());

impl Drop for LogGuard {
    fn drop(&mut self) {
        log::logger().flush();
    }
}

/// Truncates `log_file` and routes every `log` record into it.
pub fn init<P: AsRef<Path>>(log_file: P, filters: &str) -> Result<LogGuard> {
    let path = log_file.as_ref();
    let file =
        File::create(path).with_context(|| format!("Failed to create log file {}", path.display()))?;

    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {}:{} [{}] {}",
                Local::now().format("%Y/%m/%d %H:%M:%S"),
                record.file().unwrap_or("?"),
                record.line().unwrap_or(0),
                record.level(),
                record.args()
            )
        })
        .parse_filters(filters)
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("Logger already initialized")?;

    Ok(LogGuard(()))
}
