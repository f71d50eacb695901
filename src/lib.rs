//! Page behaviors for a compass and Qibla finder: heading labels, the device
//! orientation session, compass rose ticks, the fullscreen button, site
//! navigation and the Qibla bearing.

pub mod config;
pub mod error;
pub mod fullscreen;
pub mod heading;
pub mod magnetic;
pub mod nav;
pub mod orientation;
pub mod platform;
pub mod qibla;
pub mod rose;

pub use error::{MagneticError, SessionError};
pub use heading::{heading_to_dir, DIRECTIONS};
pub use orientation::{start_compass, CompassHandlers, OrientationEvent};
pub use qibla::{calc_qibla, Coordinate, MECCA};
pub use rose::build_compass_rose_ticks;
