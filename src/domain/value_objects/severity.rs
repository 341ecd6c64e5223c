use serde::{Deserialize, Serialize};

/// Severity level for findings.
///
/// The `Display` strings are a stable contract: downstream tooling greps
/// stdout for the `WARNING:`/`CRITICAL:` prefixes built from them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "WARNING"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn display_formats() {
        assert_eq!(Severity::Warning.to_string(), "WARNING");
        assert_eq!(Severity::Critical.to_string(), "CRITICAL");
    }

    #[test]
    fn ordering() {
        assert!(Severity::Warning < Severity::Critical);
    }

    #[test]
    fn serde_roundtrip() {
        for severity in [Severity::Warning, Severity::Critical] {
            let json = serde_json::to_string(&severity).expect("serialize");
            let deserialized: Severity = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(severity, deserialized);
        }
    }
}
