use crate::core::distance::EARTH_RADIUS_KM;
use crate::models::{EligibilityCriteria, GeoPoint, DEFAULT_MAX_DISTANCE_KM, OFFICE_LATITUDE, OFFICE_LONGITUDE};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use validator::Validate;

/// Default location of the customer feed
pub const DEFAULT_CUSTOMERS_URL: &str = "https://s3.amazonaws.com/intercom-take-home-test/customers.txt";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct Settings {
    #[serde(default)]
    #[validate(nested)]
    pub source: SourceSettings,
    #[serde(default)]
    #[validate(nested)]
    pub office: OfficeSettings,
    #[serde(default)]
    #[validate(nested)]
    pub eligibility: EligibilitySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SourceSettings {
    #[serde(default = "default_url")]
    #[validate(url)]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    #[validate(range(min = 1))]
    pub timeout_secs: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_url() -> String { DEFAULT_CUSTOMERS_URL.to_string() }
fn default_timeout_secs() -> u64 { 30 }

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OfficeSettings {
    #[serde(default = "default_office_latitude")]
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[serde(default = "default_office_longitude")]
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl Default for OfficeSettings {
    fn default() -> Self {
        Self {
            latitude: default_office_latitude(),
            longitude: default_office_longitude(),
        }
    }
}

fn default_office_latitude() -> f64 { OFFICE_LATITUDE }
fn default_office_longitude() -> f64 { OFFICE_LONGITUDE }

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EligibilitySettings {
    #[serde(default = "default_max_distance_km")]
    #[validate(range(min = 0.0))]
    pub max_distance_km: f64,
    #[serde(default = "default_earth_radius_km")]
    #[validate(range(exclusive_min = 0.0))]
    pub earth_radius_km: f64,
}

impl Default for EligibilitySettings {
    fn default() -> Self {
        Self {
            max_distance_km: default_max_distance_km(),
            earth_radius_km: default_earth_radius_km(),
        }
    }
}

fn default_max_distance_km() -> f64 { DEFAULT_MAX_DISTANCE_KM }
fn default_earth_radius_km() -> f64 { EARTH_RADIUS_KM }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with INVITES)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., INVITES__ELIGIBILITY__MAX_DISTANCE_KM -> eligibility.max_distance_km
            .add_source(environment())
            .build()?;

        settings.try_deserialize::<Self>()?.validated()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize::<Self>()?.validated()
    }

    /// Reject settings that would make the run meaningless
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate()
            .map_err(|e| ConfigError::Message(format!("Invalid configuration: {}", e)))?;
        Ok(self)
    }

    /// Eligibility parameters for the pipeline
    pub fn criteria(&self) -> EligibilityCriteria {
        EligibilityCriteria {
            origin: GeoPoint::new(self.office.latitude, self.office.longitude),
            max_distance_km: self.eligibility.max_distance_km,
            earth_radius_km: self.eligibility.earth_radius_km,
        }
    }
}

fn environment() -> Environment {
    Environment::with_prefix("INVITES")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
