pub mod nominatim;

pub use nominatim::{NominatimPlace, NominatimResolver};

use crate::error::Result;
use crate::models::Coordinate;

/// Maps a free-text place name to a coordinate.
///
/// Implementations return `LocatorError::GeocodeNotFound` when the name has no match.
#[allow(async_fn_in_trait)]
pub trait CoordinateResolver {
    async fn resolve(&self, place: &str) -> Result<Coordinate>;
}
