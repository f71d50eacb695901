//! Error types for the compass session and magnetic model.

use thiserror::Error;

use crate::platform::PlatformError;

/// Why an orientation session ended without subscribing to sensor events.
///
/// The display text is the status line shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The user refused (or dismissed) the sensor permission prompt.
    #[error("⚠ Permission denied. Enable motion sensors in browser settings.")]
    PermissionDenied,

    /// The permission request itself failed.
    #[error("⚠ Could not request permission: {0}")]
    PermissionRequest(#[source] PlatformError),

    /// The host has no orientation sensors.
    #[error("⚠ This device does not support orientation sensors. Open on a mobile phone.")]
    Unsupported,
}

/// Errors from the geomagnetic field model.
#[derive(Debug, Error)]
pub enum MagneticError {
    /// The date has no counterpart in the model's calendar.
    #[error("date {0} cannot be expressed as a model date")]
    InvalidDate(chrono::NaiveDate),

    /// The model refused the input, including dates outside its validity
    /// window.
    #[error("magnetic model rejected the input: {0}")]
    Model(String),
}
