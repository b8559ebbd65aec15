use serde::Serialize;

use std::error::Error;
use std::fmt;

/// Mean Earth radius in kilometers. Every distance in the system is a
/// kilometer figure, including the volunteer's stored travel radius.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A validated latitude/longitude pair in decimal degrees.
///
/// Construction goes through [`Coordinates::new`], so a value of this type
/// is always finite and inside the valid degree ranges.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Error for InvalidCoordinate {}
impl fmt::Display for InvalidCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "invalid coordinate pair ({}, {})",
            self.latitude, self.longitude
        )
    }
}

impl Coordinates {
    /// Latitude must be in [-90, 90] and longitude in [-180, 180]. NaN and
    /// infinities fail the range checks as well.
    pub fn new(latitude: f64, longitude: f64) -> Result<Coordinates, InvalidCoordinate> {
        if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) {
            Ok(Coordinates {
                latitude,
                longitude,
            })
        } else {
            Err(InvalidCoordinate {
                latitude,
                longitude,
            })
        }
    }
}

/// Great-circle distance between two points in kilometers, by the haversine
/// formula. Identical points give exactly 0.
pub fn distance_km(from: Coordinates, to: Coordinates) -> f64 {
    let from_lat = from.latitude.to_radians();
    let to_lat = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + from_lat.cos() * to_lat.cos() * (delta_lon / 2.0).sin().powi(2);

    // Rounding can push h a hair past 1.0 for near-antipodal points, and
    // asin returns NaN outside [-1, 1].
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}
