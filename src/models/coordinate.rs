use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::utils::coordinates::{haversine_distance, parse_coordinate};

/// A point in decimal degrees. Values are not range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parse a latitude/longitude pair given in decimal degrees
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self> {
        Ok(Self::new(
            parse_coordinate(latitude)?,
            parse_coordinate(longitude)?,
        ))
    }

    /// Great-circle distance in kilometers
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        haversine_distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}
