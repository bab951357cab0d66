pub mod cli;
pub mod config;
pub mod error;
pub mod geocoding;
pub mod models;
pub mod processors;
pub mod readers;
pub mod utils;

pub use error::{LocatorError, Result};
pub use models::{Coordinate, Station, StationDistance};
pub use processors::{query, OutputFormat, QueryOutput, StationProximityQuery};
