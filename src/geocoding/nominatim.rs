use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::{LocatorError, Result};
use crate::geocoding::CoordinateResolver;
use crate::models::Coordinate;
use crate::utils::coordinates::parse_coordinate;

/// A single hit from the Nominatim `/search` endpoint. Coordinates arrive as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Forward geocoder backed by an OpenStreetMap Nominatim server
#[derive(Debug, Clone)]
pub struct NominatimResolver {
    client: Client,
    base_url: String,
}

impl NominatimResolver {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }
}

impl CoordinateResolver for NominatimResolver {
    async fn resolve(&self, place: &str) -> Result<Coordinate> {
        let url = self.search_url();
        debug!("Geocoding '{}' via {}", place, url);

        let places: Vec<NominatimPlace> = self
            .client
            .get(&url)
            .query(&[("q", place), ("format", "jsonv2"), ("limit", "1")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        first_coordinate(place, &places)
    }
}

/// Coordinate of the best (first) match, or `GeocodeNotFound` when there is none
pub fn first_coordinate(place: &str, places: &[NominatimPlace]) -> Result<Coordinate> {
    let best = places
        .first()
        .ok_or_else(|| LocatorError::GeocodeNotFound(place.to_string()))?;

    if let Some(name) = &best.display_name {
        debug!("'{}' resolved to {}", place, name);
    }

    Ok(Coordinate::new(
        parse_coordinate(&best.lat)?,
        parse_coordinate(&best.lon)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_coordinate_parses_strings() {
        let body = r#"[
            {"place_id": 1, "lat": "39.7392364", "lon": "-104.984862", "display_name": "Denver, Colorado, United States"},
            {"place_id": 2, "lat": "0.0", "lon": "0.0"}
        ]"#;
        let places: Vec<NominatimPlace> = serde_json::from_str(body).unwrap();

        let coordinate = first_coordinate("Denver", &places).unwrap();
        assert!((coordinate.latitude - 39.7392364).abs() < 1e-9);
        assert!((coordinate.longitude - -104.984862).abs() < 1e-9);
    }

    #[test]
    fn test_no_match_is_not_found() {
        let err = first_coordinate("Atlantis", &[]).unwrap_err();
        assert!(matches!(err, LocatorError::GeocodeNotFound(ref p) if p == "Atlantis"));
    }

    #[test]
    fn test_garbled_coordinate_is_invalid() {
        let places = vec![NominatimPlace {
            lat: "n/a".to_string(),
            lon: "0".to_string(),
            display_name: None,
        }];
        assert!(matches!(
            first_coordinate("Somewhere", &places),
            Err(LocatorError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_search_url_strips_trailing_slash() {
        let resolver = NominatimResolver::new("https://nominatim.example.org/", "test-agent").unwrap();
        assert_eq!(resolver.search_url(), "https://nominatim.example.org/search");
    }
}
