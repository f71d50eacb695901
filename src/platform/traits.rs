//! Platform abstraction traits

use super::{Capability, Result};
use crate::orientation::OrientationEvent;

pub type OrientationListener = Box<dyn FnMut(&OrientationEvent)>;

/// Callback registered for fullscreen-state changes; receives whether an
/// element is fullscreen after the change.
pub type FullscreenListener = Box<dyn FnMut(bool)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionState {
    Granted,
    Denied,
    /// The user dismissed the prompt without deciding.
    Prompt,
}

/// Device orientation sensors.
#[allow(async_fn_in_trait)]
pub trait OrientationPlatform {
    /// Whether sensor access is gated behind an explicit permission request.
    fn permission_request(&self) -> Capability;

    fn orientation_events(&self) -> Capability;

    /// Ask the user for sensor access. Only called when
    /// [`permission_request`](Self::permission_request) is supported.
    async fn request_permission(&mut self) -> Result<PermissionState>;

    /// Subscribe to orientation-change events. Listeners live as long as the
    /// platform; there is no unsubscribe.
    fn add_orientation_listener(&mut self, listener: OrientationListener);
}

pub trait FullscreenPlatform {
    fn fullscreen_api(&self) -> Capability;

    /// Whether some element currently occupies fullscreen.
    fn is_fullscreen(&self) -> bool;

    /// Targets the root document element.
    fn request_fullscreen(&mut self) -> Result<()>;

    fn exit_fullscreen(&mut self) -> Result<()>;

    /// Subscribe to fullscreen-state changes, whatever caused them.
    fn add_fullscreen_listener(&mut self, listener: FullscreenListener);
}
