use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Represents the severity level of a log message.
///
/// Variants are declared from most to least severe, so `Ord` can be used to
/// filter: a message is shown when its level is `<=` the logger threshold.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The interpreter cannot continue.
    Fatal,
    /// Something failed but execution goes on.
    Error,
    /// Unexpected input that was corrected or ignored.
    Warn,
    /// Progress information.
    Info,
    /// Detailed tracing of runs and parsing.
    Debug,
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Fatal => write!(f, "[FATAL]"),
            Severity::Error => write!(f, "[ERROR]"),
            Severity::Warn => write!(f, "[WARN]"),
            Severity::Info => write!(f, "[INFO]"),
            Severity::Debug => write!(f, "[DEBUG]"),
        }
    }
}

/// A structured log message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogMessage {
    pub level: Severity,
    pub msg: String,
}

impl Display for LogMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.level, self.msg)
    }
}

impl LogMessage {
    pub fn new(level: Severity, msg: String) -> Self {
        LogMessage { level, msg }
    }

    pub fn error(msg: String) -> Self {
        Self::new(Severity::Error, msg)
    }

    pub fn warn(msg: String) -> Self {
        Self::new(Severity::Warn, msg)
    }

    pub fn info(msg: String) -> Self {
        Self::new(Severity::Info, msg)
    }

    pub fn debug(msg: String) -> Self {
        Self::new(Severity::Debug, msg)
    }
}
