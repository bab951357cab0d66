use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::Result;
use crate::models::{Coordinate, Station};

/// Station table compiled into the binary
const EMBEDDED_STATIONS: &str = include_str!("../../data/nexrad_stations.csv");

/// One row of the NEXRAD station export. Columns not named here are ignored.
#[derive(Debug, Deserialize)]
struct StationRow {
    #[serde(rename = "Radar ID")]
    radar_id: String,

    #[serde(rename = "Site Name", default)]
    site_name: String,

    #[serde(rename = "Latitude")]
    latitude: String,

    #[serde(rename = "Longitude")]
    longitude: String,
}

#[derive(Debug, Default)]
pub struct StationReader;

impl StationReader {
    pub fn new() -> Self {
        Self
    }

    /// Read the station table from a CSV file with a header row
    pub fn read_stations(&self, path: &Path) -> Result<Vec<Station>> {
        let file = std::fs::File::open(path)?;
        let stations = self.read_from(file)?;
        debug!("Loaded {} stations from {}", stations.len(), path.display());
        Ok(stations)
    }

    /// Read the station table from any CSV source with a header row
    pub fn read_from<R: Read>(&self, source: R) -> Result<Vec<Station>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);

        let mut stations = Vec::new();
        for (index, row) in reader.deserialize::<StationRow>().enumerate() {
            let row = row?;
            // Header is line 1
            let line = index + 2;

            if row.radar_id.is_empty() {
                warn!("Skipping station row {} with no Radar ID", line);
                continue;
            }

            let coordinate = Coordinate::parse(&row.latitude, &row.longitude)?;
            let station = Station::new(
                row.radar_id,
                row.site_name,
                coordinate.latitude,
                coordinate.longitude,
            );

            if !station.has_valid_coordinates() {
                warn!(
                    "Station {} on row {} has out-of-range coordinates ({})",
                    station.id, line, coordinate
                );
            }

            stations.push(station);
        }

        Ok(stations)
    }

    /// The built-in NEXRAD station table
    pub fn embedded_stations(&self) -> Result<Vec<Station>> {
        self.read_from(EMBEDDED_STATIONS.as_bytes())
    }

    /// Read `path` when it exists, otherwise fall back to the built-in table
    pub fn load_or_embedded(&self, path: &Path) -> Result<Vec<Station>> {
        if path.exists() {
            self.read_stations(path)
        } else {
            warn!(
                "Station table {} not found, using built-in table",
                path.display()
            );
            self.embedded_stations()
        }
    }
}
