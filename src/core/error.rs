use thiserror::Error;

/// Startup time failure raised when a bidder's configuration is
/// structurally incomplete.
///
/// This is never recovered locally; it propagates to the bootstrap caller
/// so the process refuses to come up before accepting any traffic. There
/// is no retry path, configuration is not transiently invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid bidder configuration: {reason}")]
pub struct ConfigurationError {
    reason: String,
}

impl ConfigurationError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_reason() {
        let err = ConfigurationError::new("meta-info section is missing");
        assert_eq!(
            err.to_string(),
            "invalid bidder configuration: meta-info section is missing"
        );
        assert_eq!(err.reason(), "meta-info section is missing");
    }
}
