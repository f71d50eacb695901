//! Platform error types

use thiserror::Error;

pub type Result<T> = core::result::Result<T, PlatformError>;

/// Failures reported by the host when a platform call is refused or throws.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("{0}")]
    Rejected(String),
    #[error("not supported on this platform")]
    Unsupported,
}

impl PlatformError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_displays_host_message() {
        let err = PlatformError::rejected("NotAllowedError: user gesture required");
        assert_eq!(err.to_string(), "NotAllowedError: user gesture required");
    }

    #[test]
    fn unsupported_display() {
        assert!(PlatformError::Unsupported.to_string().contains("not supported"));
    }
}
