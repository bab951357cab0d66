pub mod output_format;
pub mod proximity_query;

pub use output_format::{OutputFormat, QueryOutput};
pub use proximity_query::{query, StationProximityQuery};
