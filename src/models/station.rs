use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Coordinate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Station {
    #[validate(length(min = 1))]
    pub id: String,

    pub name: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl Station {
    pub fn new(id: String, name: String, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            name,
            latitude,
            longitude,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// True when both coordinates fall inside the usual degree ranges.
    /// Stations outside them are still usable by queries.
    pub fn has_valid_coordinates(&self) -> bool {
        self.validate().is_ok()
    }
}
