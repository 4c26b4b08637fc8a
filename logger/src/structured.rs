//! JSON-lines record format for new deployments: one object per line with
//! explicit fields, so readers do not depend on the legacy stamp width. The
//! legacy fixed-offset reader stays available for files written before the
//! switch.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::{error::LogError, severity::Severity};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LogRecord {
    pub time: DateTime<Local>,
    pub severity: Severity,
    pub message: String,
}

impl LogRecord {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        LogRecord {
            time: Local::now(),
            severity,
            message: message.into(),
        }
    }

    /// Serializes the record as a single JSON line.
    pub fn encode(&self) -> Result<String, LogError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn decode(line: &str) -> Result<Self, LogError> {
        Ok(serde_json::from_str(line)?)
    }
}
