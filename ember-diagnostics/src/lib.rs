// Host-side diagnostic model for the Ember VM
// Severity classification and the error type host sinks report through

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// Host severity classification, ordered by importance.
///
/// Every diagnostic the VM delivers carries exactly one of these. Adapters
/// translating foreign severity encodings (e.g. the classic extension API's
/// integer codes) must map into this model through an explicit table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Notice,
    Deprecated,
    Warning,
    /// An error the engine keeps running past once it has been reported.
    Recoverable,
    Fatal,
}

impl Severity {
    /// Every severity, in ascending order of importance.
    pub const ALL: [Severity; 5] = [
        Severity::Notice,
        Severity::Deprecated,
        Severity::Warning,
        Severity::Recoverable,
        Severity::Fatal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Notice => "notice",
            Severity::Deprecated => "deprecated",
            Severity::Warning => "warning",
            Severity::Recoverable => "recoverable error",
            Severity::Fatal => "fatal error",
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Severity::Fatal)
    }

    /// Level used when a diagnostic is routed through the `log` facade.
    pub fn log_level(&self) -> log::Level {
        match self {
            Severity::Notice => log::Level::Info,
            Severity::Deprecated | Severity::Warning => log::Level::Warn,
            Severity::Recoverable | Severity::Fatal => log::Level::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Notice => write!(f, "{}", "notice".blue().bold()),
            Severity::Deprecated => write!(f, "{}", "deprecated".cyan().bold()),
            Severity::Warning => write!(f, "{}", "warning".yellow().bold()),
            Severity::Recoverable => write!(f, "{}", "recoverable error".red()),
            Severity::Fatal => write!(f, "{}", "fatal error".red().bold()),
        }
    }
}

/// Failure reported by a host sink while delivering a diagnostic or a write.
///
/// Adaptation layers propagate this unchanged; they add no error channel of
/// their own.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("error sink failed to deliver diagnostic: {0}")]
    Report(String),

    #[error("output sink refused {len} bytes: {reason}")]
    Write { len: usize, reason: String },
}
