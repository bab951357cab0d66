pub mod coordinate;
pub mod station;
pub mod station_distance;

pub use coordinate::Coordinate;
pub use station::Station;
pub use station_distance::StationDistance;
