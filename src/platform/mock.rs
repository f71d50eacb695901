//! In-memory platform implementations for testing
//!
//! The mocks record what the page behaviors asked of them and let tests play
//! the host's side: emitting sensor events or leaving fullscreen out-of-band.

use std::cell::RefCell;

use super::{
    Capability, FullscreenListener, FullscreenPlatform, OrientationListener, OrientationPlatform,
    PermissionState, PlatformError, Result,
};
use crate::{
    fullscreen::{ClickListener, GlyphButton},
    orientation::OrientationEvent,
};

/// Mock orientation host
///
/// Defaults to a host with orientation events and no permission gate.
pub struct MockOrientation {
    permission: Capability,
    events: Capability,
    response: Result<PermissionState>,
    listeners: Vec<OrientationListener>,
    permission_requests: usize,
}

impl MockOrientation {
    pub fn new() -> Self {
        Self {
            permission: Capability::Unsupported,
            events: Capability::Supported,
            response: Ok(PermissionState::Granted),
            listeners: Vec::new(),
            permission_requests: 0,
        }
    }

    /// A host that gates sensors behind a permission prompt answering `response`.
    pub fn with_permission_gate(mut self, response: Result<PermissionState>) -> Self {
        self.permission = Capability::Supported;
        self.response = response;
        self
    }

    /// A host with no orientation sensors and no permission gate.
    pub fn without_orientation(mut self) -> Self {
        self.permission = Capability::Unsupported;
        self.events = Capability::Unsupported;
        self
    }

    pub fn with_event_capability(mut self, events: Capability) -> Self {
        self.events = events;
        self
    }

    pub fn emit(&mut self, event: OrientationEvent) {
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn permission_requests(&self) -> usize {
        self.permission_requests
    }
}

impl Default for MockOrientation {
    fn default() -> Self {
        Self::new()
    }
}

impl OrientationPlatform for MockOrientation {
    fn permission_request(&self) -> Capability {
        self.permission
    }

    fn orientation_events(&self) -> Capability {
        self.events
    }

    async fn request_permission(&mut self) -> Result<PermissionState> {
        self.permission_requests += 1;
        if !self.permission.is_supported() {
            return Err(PlatformError::Unsupported);
        }
        self.response.clone()
    }

    fn add_orientation_listener(&mut self, listener: OrientationListener) {
        self.listeners.push(listener);
    }
}

/// Notifies listeners on every state change, like `fullscreenchange`.
pub struct MockFullscreen {
    api: Capability,
    fullscreen: bool,
    reject_requests: bool,
    listeners: Vec<FullscreenListener>,
    requests: usize,
    exits: usize,
}

impl MockFullscreen {
    pub fn new() -> Self {
        Self {
            api: Capability::Supported,
            fullscreen: false,
            reject_requests: false,
            listeners: Vec::new(),
            requests: 0,
            exits: 0,
        }
    }

    /// Refuse every fullscreen request, as a host policy would.
    pub fn rejecting(mut self) -> Self {
        self.reject_requests = true;
        self
    }

    pub fn without_api(mut self) -> Self {
        self.api = Capability::Unsupported;
        self
    }

    /// Leave fullscreen without going through the page (e.g. the Escape key).
    pub fn exit_externally(&mut self) {
        self.set_fullscreen(false);
    }

    pub fn requests(&self) -> usize {
        self.requests
    }

    pub fn exits(&self) -> usize {
        self.exits
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        if self.fullscreen == fullscreen {
            return;
        }
        self.fullscreen = fullscreen;
        for listener in self.listeners.iter_mut() {
            listener(fullscreen);
        }
    }
}

impl Default for MockFullscreen {
    fn default() -> Self {
        Self::new()
    }
}

impl FullscreenPlatform for MockFullscreen {
    fn fullscreen_api(&self) -> Capability {
        self.api
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn request_fullscreen(&mut self) -> Result<()> {
        self.requests += 1;
        if self.reject_requests {
            return Err(PlatformError::rejected("fullscreen request denied by policy"));
        }
        self.set_fullscreen(true);
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<()> {
        self.exits += 1;
        self.set_fullscreen(false);
        Ok(())
    }

    fn add_fullscreen_listener(&mut self, listener: FullscreenListener) {
        self.listeners.push(listener);
    }
}

#[derive(Default)]
pub struct MockButton {
    glyph: String,
    updates: usize,
    click_listeners: Vec<ClickListener>,
}

impl MockButton {
    pub fn new(glyph: &str) -> Self {
        Self {
            glyph: glyph.to_string(),
            ..Self::default()
        }
    }

    /// Simulate a user click. Listeners run without the button borrowed, so
    /// they may relabel it.
    pub fn press(button: &RefCell<Self>) {
        let mut listeners = std::mem::take(&mut button.borrow_mut().click_listeners);
        for listener in listeners.iter_mut() {
            listener();
        }
        let mut button = button.borrow_mut();
        listeners.append(&mut button.click_listeners);
        button.click_listeners = listeners;
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn updates(&self) -> usize {
        self.updates
    }

    pub fn click_listener_count(&self) -> usize {
        self.click_listeners.len()
    }
}

impl GlyphButton for MockButton {
    fn set_glyph(&mut self, glyph: &str) {
        self.glyph = glyph.to_string();
        self.updates += 1;
    }

    fn add_click_listener(&mut self, listener: ClickListener) {
        self.click_listeners.push(listener);
    }
}
