//! Host platform abstraction
//!
//! The page behaviors only talk to the browser through these traits, so the
//! same logic runs against a real host, the stdin-driven CLI host, or the
//! in-memory mocks used by the tests.

pub mod error;
pub mod lines;
pub mod mock;
pub mod traits;

pub use error::{PlatformError, Result};
pub use traits::{
    FullscreenListener, FullscreenPlatform, OrientationListener, OrientationPlatform,
    PermissionState,
};

/// Outcome of probing the host for an optional capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Capability {
    Supported,
    Unsupported,
    /// The host cannot tell without trying.
    #[default]
    Unknown,
}

impl Capability {
    pub fn is_supported(self) -> bool {
        self == Capability::Supported
    }

    pub fn is_unsupported(self) -> bool {
        self == Capability::Unsupported
    }
}

impl From<bool> for Capability {
    fn from(present: bool) -> Self {
        if present {
            Capability::Supported
        } else {
            Capability::Unsupported
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presence_maps_to_capability() {
        assert_eq!(Capability::from(true), Capability::Supported);
        assert_eq!(Capability::from(false), Capability::Unsupported);
    }

    #[test]
    fn unknown_is_neither_supported_nor_unsupported() {
        let cap = Capability::default();
        assert_eq!(cap, Capability::Unknown);
        assert!(!cap.is_supported());
        assert!(!cap.is_unsupported());
    }
}
