//! Log writer module
//!
//! Thread-safe log output to stdout/stderr, a fixed file, or a daily file
//! (`<dir>/<YYYY-MM-DD>.txt`) for the error log.

use chrono::{Local, NaiveDate};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock, PoisonError};

/// Global log writer instance
static LOG_WRITER: OnceLock<LogWriter> = OnceLock::new();

/// Log output target
enum LogTarget {
    Stdout,
    Stderr,
    File(Mutex<File>),
    /// One file per local calendar day inside the directory
    Daily(PathBuf),
}

/// Thread-safe log writer
pub struct LogWriter {
    /// Access and info messages
    access: LogTarget,
    /// Errors and uncaught faults
    error: LogTarget,
}

impl LogWriter {
    fn new(access_log_file: Option<&str>, error_log_dir: Option<&str>) -> io::Result<Self> {
        let access = match access_log_file {
            Some(path) => LogTarget::File(Mutex::new(open_log_file(Path::new(path))?)),
            None => LogTarget::Stdout,
        };
        let error = match error_log_dir {
            Some(dir) => LogTarget::Daily(PathBuf::from(dir)),
            None => LogTarget::Stderr,
        };

        Ok(Self { access, error })
    }

    pub fn write_access(&self, message: &str) {
        write_to_target(&self.access, message);
    }

    pub fn write_error(&self, message: &str) {
        write_to_target(&self.error, message);
    }
}

/// Path of the daily log file for `date`
pub fn daily_log_path(dir: &Path, date: NaiveDate) -> PathBuf {
    dir.join(format!("{}.txt", date.format("%Y-%m-%d")))
}

/// Append one entry to today's file in `dir`
pub fn append_daily(dir: &Path, message: &str) -> io::Result<()> {
    let path = daily_log_path(dir, Local::now().date_naive());
    let mut file = open_log_file(&path)?;
    writeln!(file, "[{}] {message}", Local::now().format("%d-%b-%Y %H:%M:%S"))
}

/// Open or create a log file for appending
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}

fn write_to_target(target: &LogTarget, message: &str) {
    match target {
        LogTarget::Stdout => println!("{message}"),
        LogTarget::Stderr => eprintln!("{message}"),
        LogTarget::File(file) => {
            let mut f = file.lock().unwrap_or_else(PoisonError::into_inner);
            let _ = writeln!(f, "{message}");
        }
        LogTarget::Daily(dir) => {
            if let Err(e) = append_daily(dir, message) {
                eprintln!("[ERROR] Cannot write to error log in {}: {e}", dir.display());
                eprintln!("{message}");
            }
        }
    }
}

/// Initialize the global log writer
///
/// This should be called once at application startup.
pub fn init(access_log_file: Option<&str>, error_log_dir: Option<&str>) -> io::Result<()> {
    let writer = LogWriter::new(access_log_file, error_log_dir)?;
    LOG_WRITER.set(writer).map_err(|_| {
        io::Error::new(
            io::ErrorKind::AlreadyExists,
            "Log writer already initialized",
        )
    })
}

/// Get the global log writer, if initialized
pub fn get() -> Option<&'static LogWriter> {
    LOG_WRITER.get()
}
