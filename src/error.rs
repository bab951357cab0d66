use thiserror::Error;

pub type Result<T> = std::result::Result<T, LocatorError>;

#[derive(Error, Debug)]
pub enum LocatorError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid output format: '{0}'. Expected 'list', 'json', or 'readable'")]
    InvalidFormat(String),

    #[error("Invalid coordinate format: {0}")]
    InvalidCoordinate(String),

    #[error("Search radius must be a non-negative number of kilometers, got: {0}")]
    InvalidRadius(f64),

    #[error("Could not geocode '{0}'. Please check the place name.")]
    GeocodeNotFound(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}
