use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use crate::{error::LogError, severity::Severity};

/// Stamp rendering for a fresh log line. Every component is fixed width
/// (zero-padded date and time, two-letter AM/PM marker, `+HH:MM` offset) so
/// the severity tag always starts at [`SEVERITY_COLUMN`].
const STAMP_FORMAT: &str = "[%m/%d/%Y | %H:%M:%S %p %:z] ";

/// Column at which the severity tag begins in a stamped line.
pub const SEVERITY_COLUMN: usize = 34;

/// Renders one log entry as its canonical line.
///
/// With `omit_stamp` set the result is exactly `message`. That mode exists
/// for replay, where the stored line already carries its original stamp and
/// must not be stamped again.
pub fn format_line<Tz: TimeZone>(
    message: &str,
    severity: Severity,
    time: &DateTime<Tz>,
    omit_stamp: bool,
) -> String
where
    Tz::Offset: Display,
{
    if omit_stamp {
        return message.to_string();
    }
    format!("{}{}: {}", time.format(STAMP_FORMAT), severity, message)
}

/// Recovers the severity of a stored line from the single byte at
/// [`SEVERITY_COLUMN`], the first letter of the uppercase tag.
///
/// Assumes every stored line carries a stamp of exactly the stamp format's
/// width. A line whose own text happens to put one of the five tag letters
/// at that column is misread rather than rejected; lines shorter than the
/// column, or with any other byte there, fail with [`LogError::Parse`].
pub fn recover_severity(line: &str) -> Result<Severity, LogError> {
    line.as_bytes()
        .get(SEVERITY_COLUMN)
        .copied()
        .and_then(Severity::from_initial)
        .ok_or_else(|| LogError::Parse(line.to_string()))
}
