//! Colored console logging with flat-file persistence and replay.
//!
//! One process, one log file, blocking I/O. The file has no locking
//! discipline; concurrent appenders are unsupported.

use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::PathBuf,
};

use chrono::Local;
use console::Console;
use error::LogError;
use format::{format_line, recover_severity};
use severity::Severity;

pub mod console;
pub mod error;
pub mod format;
pub mod severity;
#[cfg(feature = "structured")]
pub mod structured;

/// Default log file location, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "log.txt";

/// What [`LogSink::open`] does when the log file already exists.
pub enum OpenBehavior {
    /// Keep the existing file and append to it.
    Reuse,
    /// Recreate the file, discarding previous entries.
    Truncate,
}

/// A struct that mediates all console and file log writes. It owns the file
/// path and the console capability; the file itself is opened and closed
/// within each call.
pub struct LogSink<C: Console> {
    console: C,
    path: PathBuf,
}

impl<C: Console> LogSink<C> {
    /// Sets up the sink and makes sure the log file exists, creating it when
    /// missing (or unconditionally with [`OpenBehavior::Truncate`]). The
    /// outcome of that check is itself logged to the console.
    pub fn open(console: C, path: impl Into<PathBuf>, behavior: OpenBehavior) -> Self {
        let mut sink = Self {
            console,
            path: path.into(),
        };
        sink.ensure_file(behavior);
        sink
    }

    fn ensure_file(&mut self, behavior: OpenBehavior) {
        let outcome = match behavior {
            OpenBehavior::Truncate => File::create(&self.path).map(|_| "recreated the log file"),
            OpenBehavior::Reuse => {
                if self.path.exists() {
                    Ok("found an existing log file")
                } else {
                    File::create(&self.path).map(|_| "created a new log file")
                }
            }
        };
        match outcome {
            Ok(what) => {
                let message = format!("{} at '{}'", what, self.path.display());
                self.log(&message, Severity::Info);
            }
            Err(e) => {
                let message = format!(
                    "failed to create the log file at '{}': {}",
                    self.path.display(),
                    e
                );
                self.log(&message, Severity::Error);
            }
        }
    }

    /// Prints a colored, stamped message to the console.
    pub fn log(&mut self, message: &str, severity: Severity) {
        self.emit(message, severity, false);
    }

    fn emit(&mut self, message: &str, severity: Severity, omit_stamp: bool) {
        self.console.set_foreground_color(severity.color());
        let line = format_line(message, severity, &Local::now(), omit_stamp);
        self.console.write_line(&line);
    }

    /// Appends a stamped message to the log file, echoing it to the console
    /// first when `echo_console` is set.
    ///
    /// An append failure never reaches the caller: the entry is dropped and
    /// the failure reported through [`LogSink::log`] at Warning severity.
    pub fn log_to_file(&mut self, message: &str, severity: Severity, echo_console: bool) {
        if echo_console {
            self.log(message, severity);
        }
        let line = format_line(message, severity, &Local::now(), false);
        if self.append_line(&line).is_err() {
            let warning = format!("message: '{}' has not been logged to the log file!", message);
            self.log(&warning, Severity::Warning);
        }
    }

    /// Appends a structured record to the log file. Same error contract as
    /// [`LogSink::log_to_file`].
    #[cfg(feature = "structured")]
    pub fn log_record(&mut self, message: &str, severity: Severity, echo_console: bool) {
        if echo_console {
            self.log(message, severity);
        }
        let persisted = structured::LogRecord::new(severity, message)
            .encode()
            .and_then(|line| self.append_line(&line).map_err(LogError::from));
        if persisted.is_err() {
            let warning = format!("message: '{}' has not been logged to the log file!", message);
            self.log(&warning, Severity::Warning);
        }
    }

    fn append_line(&self, line: &str) -> Result<(), std::io::Error> {
        let mut file = File::options().append(true).open(&self.path)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }

    /// Every stored line, oldest first. Fails when the log file is missing;
    /// reading never creates it.
    pub fn load_entries(&self) -> Result<Vec<String>, LogError> {
        if !self.path.try_exists()? {
            return Err(LogError::FileNotFound(self.path.clone()));
        }
        let reader = BufReader::new(File::open(&self.path)?);
        Ok(reader.lines().collect::<Result<Vec<_>, _>>()?)
    }

    /// Re-displays every stored entry on the console with its original
    /// severity color, without re-stamping.
    ///
    /// An entry whose severity cannot be recovered is reported at Fatal
    /// severity (to the file and the console) and skipped; the rest of the
    /// file is still replayed. Only a missing file aborts the replay.
    pub fn replay(&mut self) -> Result<(), LogError> {
        for entry in self.load_entries()? {
            if let Err(e) = self.redisplay(&entry) {
                let report = e.to_string();
                self.log_to_file(&report, Severity::Fatal, true);
            }
        }
        Ok(())
    }

    fn redisplay(&mut self, entry: &str) -> Result<(), LogError> {
        #[cfg(feature = "structured")]
        if entry.starts_with('{') {
            let record = structured::LogRecord::decode(entry)?;
            let rendered = format_line(&record.message, record.severity, &record.time, false);
            self.emit(&rendered, record.severity, true);
            return Ok(());
        }
        let severity = recover_severity(entry)?;
        self.emit(entry, severity, true);
        Ok(())
    }
}
