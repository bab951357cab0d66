use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Result;
use crate::processors::OutputFormat;
use crate::utils::constants::{
    CONFIG_FILE, DEFAULT_GEOCODER_URL, DEFAULT_RADIUS_KM, DEFAULT_USER_AGENT, ENV_PREFIX,
    FORMAT_READABLE, STATIONS_FILE,
};

/// Settings layered from built-in defaults, an optional TOML file and
/// `NEXRAD_LOCATOR_*` environment variables, in that order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocatorConfig {
    pub stations_file: PathBuf,
    pub radius_km: f64,
    pub output_format: String,
    pub geocoder_url: String,
    pub user_agent: String,
}

impl LocatorConfig {
    /// Load configuration. An explicit `config_file` must exist; without one,
    /// `nexrad-locator.toml` in the working directory is used if present.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        Self::build(config_file, Environment::with_prefix(ENV_PREFIX))
    }

    fn build(config_file: Option<&Path>, env: Environment) -> Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(CONFIG_FILE).required(false),
        };

        let config = Config::builder()
            .set_default("stations_file", STATIONS_FILE)?
            .set_default("radius_km", DEFAULT_RADIUS_KM)?
            .set_default("output_format", FORMAT_READABLE)?
            .set_default("geocoder_url", DEFAULT_GEOCODER_URL)?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .add_source(file)
            .add_source(env.try_parsing(true))
            .build()?;

        let settings: LocatorConfig = config.try_deserialize()?;
        debug!("Loaded configuration: {:?}", settings);
        Ok(settings)
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        self.output_format.parse()
    }
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            stations_file: PathBuf::from(STATIONS_FILE),
            radius_km: DEFAULT_RADIUS_KM,
            output_format: FORMAT_READABLE.to_string(),
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
