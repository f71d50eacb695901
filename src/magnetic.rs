use chrono::Datelike;
use serde::{Deserialize, Serialize};
use world_magnetic_model::{
    time::Date,
    uom::si::{
        angle::degree,
        f32::{Angle, Length},
        length::meter,
        magnetic_flux_density::microtesla,
    },
    GeomagneticField,
};

use crate::{error::MagneticError, heading::normalize_degrees, qibla::Coordinate};

#[derive(Deserialize, Serialize, Clone, Copy, Default, Debug, PartialEq)]
pub struct MagneticData {
    /// in degrees, positive east of true north
    pub declination: f32,
    /// in degrees
    pub inclination: f32,
    /// in µT
    pub magnetic_flux_density: f32,
}

impl MagneticData {
    /// Field at `position` and `altitude` (metres) on `date`, from the World
    /// Magnetic Model.
    pub fn at(
        position: Coordinate,
        altitude: f32,
        date: chrono::NaiveDate,
    ) -> Result<Self, MagneticError> {
        let wmm_date = Date::from_ordinal_date(date.year(), date.ordinal() as u16)
            .map_err(|_| MagneticError::InvalidDate(date))?;
        let field = GeomagneticField::new(
            Length::new::<meter>(altitude),
            Angle::new::<degree>(position.latitude as f32),
            Angle::new::<degree>(position.longitude as f32),
            wmm_date,
        )
        .map_err(|e| MagneticError::Model(format!("{e:?}")))?;

        Ok(Self {
            declination: field.declination().get::<degree>(),
            inclination: field.inclination().get::<degree>(),
            magnetic_flux_density: field.f().get::<microtesla>(),
        })
    }
}

/// Convert a bearing from true north to the reading a magnetic compass shows.
pub fn to_magnetic_bearing(true_bearing: f64, declination: f64) -> f64 {
    normalize_degrees(true_bearing - declination)
}
