use serde::{Deserialize, Serialize};

use crate::models::{Coordinate, Station};

/// A station matched by a proximity query, with its distance from the target.
///
/// Field names on the wire follow the `radar_id`/`lat`/`lon`/`distance`
/// layout consumers of the JSON output already expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationDistance {
    #[serde(rename = "radar_id")]
    pub station_id: String,

    #[serde(rename = "lat")]
    pub latitude: f64,

    #[serde(rename = "lon")]
    pub longitude: f64,

    #[serde(rename = "distance")]
    pub distance_km: f64,
}

impl StationDistance {
    pub fn new(station_id: String, latitude: f64, longitude: f64, distance_km: f64) -> Self {
        Self {
            station_id,
            latitude,
            longitude,
            distance_km,
        }
    }

    pub fn from_station(station: &Station, target: &Coordinate) -> Self {
        Self::new(
            station.id.clone(),
            station.latitude,
            station.longitude,
            target.distance_to(&station.coordinate()),
        )
    }
}
