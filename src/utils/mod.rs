pub mod constants;
pub mod coordinates;
pub mod progress;

pub use constants::*;
pub use coordinates::{haversine_distance, parse_coordinate};
pub use progress::ProgressReporter;
