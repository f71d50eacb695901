use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    error::SessionError,
    heading::heading_to_dir,
    platform::{OrientationPlatform, PermissionState},
};

pub const REQUESTING_PERMISSION: &str = "Requesting sensor permission…";

/// Raw orientation sample as delivered by the host.
///
/// Hosts fill in one of two conventions: a ready compass heading (WebKit),
/// or the counter-clockwise rotation about the vertical axis (`alpha`).
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct OrientationEvent {
    #[serde(rename = "webkitCompassHeading", default)]
    pub webkit_compass_heading: Option<f64>,
    #[serde(default)]
    pub alpha: Option<f64>,
}

impl OrientationEvent {
    pub fn from_compass_heading(heading: f64) -> Self {
        Self {
            webkit_compass_heading: Some(heading),
            alpha: None,
        }
    }

    pub fn from_alpha(alpha: f64) -> Self {
        Self {
            webkit_compass_heading: None,
            alpha: Some(alpha),
        }
    }

    /// Clockwise compass heading in degrees, or `None` if the event carries
    /// neither field.
    pub fn heading(&self) -> Option<f64> {
        match (self.webkit_compass_heading, self.alpha) {
            (Some(heading), _) => Some(heading),
            (None, Some(alpha)) => Some(360.0 - alpha),
            (None, None) => None,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct HeadingReading {
    /// in degrees
    pub heading: f64,
    pub direction: &'static str,
    /// RFC 3339
    pub timestamp: String,
}

impl HeadingReading {
    pub fn now(heading: f64) -> Self {
        Self {
            heading,
            direction: heading_to_dir(heading),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Caller callbacks for an orientation session. Every callback is optional.
#[derive(Default)]
pub struct CompassHandlers {
    pub on_heading: Option<Box<dyn FnMut(f64)>>,
    pub on_status: Option<Box<dyn FnMut(&str)>>,
    pub on_permission_granted: Option<Box<dyn FnOnce()>>,
}

impl CompassHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_heading(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.on_heading = Some(Box::new(f));
        self
    }

    pub fn on_status(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_status = Some(Box::new(f));
        self
    }

    pub fn on_permission_granted(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_permission_granted = Some(Box::new(f));
        self
    }
}

/// Start a compass session on `platform`.
///
/// Asks for sensor permission when the host gates it, then subscribes to
/// orientation events and reports one heading per event through
/// `on_heading`. Denial and missing sensors are reported through
/// `on_status` and returned as the error; no listener is registered then.
pub async fn start_compass<P: OrientationPlatform>(
    platform: &mut P,
    handlers: CompassHandlers,
) -> Result<(), SessionError> {
    let CompassHandlers {
        mut on_heading,
        mut on_status,
        on_permission_granted,
    } = handlers;
    let mut report = |message: &str| {
        if let Some(on_status) = on_status.as_mut() {
            on_status(message);
        }
    };

    if platform.permission_request().is_supported() {
        report(REQUESTING_PERMISSION);
        let outcome = match platform.request_permission().await {
            Ok(PermissionState::Granted) => Ok(()),
            Ok(state) => {
                debug!("sensor permission answered {state:?}");
                Err(SessionError::PermissionDenied)
            }
            Err(e) => Err(SessionError::PermissionRequest(e)),
        };
        if let Err(err) = outcome {
            warn!("compass session not started: {err}");
            report(&err.to_string());
            return Err(err);
        }
    } else if platform.orientation_events().is_unsupported() {
        let err = SessionError::Unsupported;
        warn!("compass session not started: {err}");
        report(&err.to_string());
        return Err(err);
    }

    if let Some(granted) = on_permission_granted {
        granted();
    }

    platform.add_orientation_listener(Box::new(move |event: &OrientationEvent| {
        let Some(heading) = event.heading() else {
            return;
        };
        if let Some(on_heading) = on_heading.as_mut() {
            on_heading(heading);
        }
    }));
    debug!("subscribed to orientation events");
    Ok(())
}
