use crate::error::{LocatorError, Result};
use crate::utils::constants::EARTH_RADIUS_KM;

/// Parse a coordinate given in decimal degrees.
///
/// Range is not checked: `123.0` parses fine as a latitude. Anything that is
/// not a finite number, including `NaN`, `inf` and `DD:MM:SS` text, is rejected.
///
/// # Examples
/// ```
/// use nexrad_locator::utils::parse_coordinate;
///
/// assert_eq!(parse_coordinate(" -104.5458 ").unwrap(), -104.5458);
/// assert!(parse_coordinate("inf").is_err());
/// ```
pub fn parse_coordinate(coord_str: &str) -> Result<f64> {
    let trimmed = coord_str.trim();

    let value = trimmed.parse::<f64>().map_err(|_| {
        LocatorError::InvalidCoordinate(format!("Invalid coordinate value: '{}'", coord_str))
    })?;

    if !value.is_finite() {
        return Err(LocatorError::InvalidCoordinate(format!(
            "Coordinate must be a finite number, got: '{}'",
            coord_str
        )));
    }

    Ok(value)
}

/// Great-circle distance in kilometers between two points given in decimal
/// degrees, using the Haversine formula on a sphere of radius 6371 km.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` slightly outside [0, 1] for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
