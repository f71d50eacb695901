use serde::{Deserialize, Serialize};

use crate::heading::normalize_degrees;

/// A point on the globe, in degrees.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// The Kaaba, Mecca.
pub const MECCA: Coordinate = Coordinate::new(21.4225, 39.8262);

/// Initial great-circle bearing from `from` to `to`, in [0, 360).
///
/// Coincident points are degenerate and yield whatever `atan2` makes of the
/// floating-point residue (0 or 180).
pub fn initial_bearing(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lon = to.longitude.to_radians() - from.longitude.to_radians();
    let bearing = d_lon
        .sin()
        .atan2(lat1.cos() * lat2.tan() - lat1.sin() * d_lon.cos())
        .to_degrees();
    normalize_degrees(bearing)
}

/// Qibla direction for an observer, clockwise from true north.
pub fn calc_qibla(latitude: f64, longitude: f64) -> f64 {
    initial_bearing(Coordinate::new(latitude, longitude), MECCA)
}
