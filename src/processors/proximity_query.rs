use tracing::debug;

use crate::error::Result;
use crate::models::{Coordinate, Station, StationDistance};
use crate::processors::output_format::{OutputFormat, QueryOutput};

/// Radius-filtered nearest-stations search over an in-memory station table.
///
/// The table is borrowed and never modified, so one table can back any number
/// of queries, including from several threads.
#[derive(Debug, Clone, Copy)]
pub struct StationProximityQuery<'a> {
    stations: &'a [Station],
}

impl<'a> StationProximityQuery<'a> {
    pub fn new(stations: &'a [Station]) -> Self {
        Self { stations }
    }

    /// All stations within `radius_km` of `target`, closest first.
    ///
    /// Stations at exactly the same distance keep their table order. A
    /// negative or NaN radius matches nothing.
    pub fn nearest(&self, target: Coordinate, radius_km: f64) -> Vec<StationDistance> {
        let mut matches: Vec<StationDistance> = self
            .stations
            .iter()
            .map(|station| StationDistance::from_station(station, &target))
            .filter(|candidate| candidate.distance_km <= radius_km)
            .collect();

        // sort_by is stable
        matches.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

        debug!(
            "{} of {} stations within {} km of ({})",
            matches.len(),
            self.stations.len(),
            radius_km,
            target
        );
        matches
    }

    pub fn query(&self, target: Coordinate, radius_km: f64, format: OutputFormat) -> QueryOutput {
        QueryOutput::render(self.nearest(target, radius_km), format)
    }

    /// Like `query`, with the format given by name (`list`, `json`, `readable`).
    /// Unknown names fail with `InvalidFormat` before any distance is computed.
    pub fn query_str(&self, target: Coordinate, radius_km: f64, format: &str) -> Result<QueryOutput> {
        let format: OutputFormat = format.parse()?;
        Ok(self.query(target, radius_km, format))
    }
}

/// One-shot form of `StationProximityQuery::query`
pub fn query(
    target: Coordinate,
    radius_km: f64,
    stations: &[Station],
    format: OutputFormat,
) -> QueryOutput {
    StationProximityQuery::new(stations).query(target, radius_km, format)
}
