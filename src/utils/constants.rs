/// Mean Earth radius used by the Haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// File names
pub const STATIONS_FILE: &str = "data/nexrad_stations.csv";
pub const CONFIG_FILE: &str = "nexrad-locator.toml";

/// Station table column headers (NOAA NEXRAD export)
pub const COLUMN_RADAR_ID: &str = "Radar ID";
pub const COLUMN_SITE_NAME: &str = "Site Name";
pub const COLUMN_LATITUDE: &str = "Latitude";
pub const COLUMN_LONGITUDE: &str = "Longitude";

/// Search defaults
pub const DEFAULT_RADIUS_KM: f64 = 200.0;

/// Output format names
pub const FORMAT_LIST: &str = "list";
pub const FORMAT_JSON: &str = "json";
pub const FORMAT_READABLE: &str = "readable";

/// Geocoding defaults
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_USER_AGENT: &str = "nexrad_locator";

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "NEXRAD_LOCATOR";
