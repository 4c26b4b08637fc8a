use std::{fmt::Display, str::FromStr};

use crossterm::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::LogError;



#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    /// The console foreground color a message of this severity is shown in.
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => Color::Green,
            Severity::Info => Color::White,
            Severity::Warning => Color::Yellow,
            Severity::Error => Color::Red,
            Severity::Fatal => Color::DarkRed,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Severity::Success => "SUCCESS",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Maps the first letter of an uppercase severity tag back to the
    /// severity. The five tags all start with a distinct letter.
    pub(crate) fn from_initial(byte: u8) -> Option<Severity> {
        match byte {
            b'S' => Some(Severity::Success),
            b'I' => Some(Severity::Info),
            b'W' => Some(Severity::Warning),
            b'E' => Some(Severity::Error),
            b'F' => Some(Severity::Fatal),
            _ => None,
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUCCESS" => Ok(Severity::Success),
            "INFO" => Ok(Severity::Info),
            "WARNING" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            "FATAL" => Ok(Severity::Fatal),
            _ => Err(LogError::InvalidSeverity(s.to_string())),
        }
    }
}
