//! Error status

use std::fmt;

/// Whether an error could resolve on its own.
///
/// A one-shot pipeline run never retries internally; the status tells the
/// caller whether rerunning the tool is worthwhile at all.
///
/// - `Permanent`: rerunning won't help without external changes
/// - `Temporary`: transient (e.g. an IO hiccup), a rerun may succeed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorStatus {
    /// Examples: ConfigInvalid, FileNotFound, ScanFailed
    #[default]
    Permanent,

    /// Examples: IoFailed
    Temporary,
}

impl ErrorStatus {
    /// Check if a rerun is worthwhile
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorStatus::Temporary)
    }

    /// Get status as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorStatus::Permanent => "permanent",
            ErrorStatus::Temporary => "temporary",
        }
    }
}

impl fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_retryable() {
        assert!(!ErrorStatus::Permanent.is_retryable());
        assert!(ErrorStatus::Temporary.is_retryable());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ErrorStatus::Permanent.to_string(), "permanent");
        assert_eq!(ErrorStatus::Temporary.to_string(), "temporary");
    }
}
