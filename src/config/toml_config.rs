use crate::adapters::catalog::{is_http_source, DEFAULT_TIMEOUT_SECONDS};
use crate::core::store::DEFAULT_STORAGE_KEY;
use crate::core::validator::BusinessHours;
use crate::domain::model::parse_time;
use crate::utils::error::{BookingError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "barber-booking.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub storage: StorageConfig,
    pub schedule: ScheduleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// URL (`http://`, `https://`) or path to a JSON file.
    pub source: String,
    pub timeout_seconds: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: "./data/servicios.json".to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: String,
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "./data".to_string(),
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub opening: String,
    pub closing: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            opening: "09:00".to_string(),
            closing: "20:00".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads and parses a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BookingError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BookingError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Explicit path if given, else `barber-booking.toml` when present, else
    /// defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Replaces `${VAR}` with the environment value; unknown names are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BookingError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn catalog_timeout(&self) -> Duration {
        Duration::from_secs(self.catalog.timeout_seconds)
    }

    pub fn business_hours(&self) -> Result<BusinessHours> {
        let opening = parse_schedule_time("schedule.opening", &self.schedule.opening)?;
        let closing = parse_schedule_time("schedule.closing", &self.schedule.closing)?;
        Ok(BusinessHours::new(opening, closing))
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("catalog.source", &self.catalog.source)?;
        if is_http_source(&self.catalog.source) {
            validation::validate_url("catalog.source", &self.catalog.source)?;
        } else {
            validation::validate_path("catalog.source", &self.catalog.source)?;
        }
        validation::validate_range("catalog.timeout_seconds", self.catalog.timeout_seconds, 1, 300)?;

        validation::validate_path("storage.data_dir", &self.storage.data_dir)?;
        validation::validate_storage_key("storage.key", &self.storage.key)?;

        let hours = self.business_hours()?;
        if hours.opening >= hours.closing {
            return Err(BookingError::InvalidConfigValueError {
                field: "schedule".to_string(),
                value: format!("{}-{}", self.schedule.opening, self.schedule.closing),
                reason: "Opening time must be before closing time".to_string(),
            });
        }

        Ok(())
    }
}

fn parse_schedule_time(field: &str, value: &str) -> Result<chrono::NaiveTime> {
    parse_time(value).ok_or_else(|| BookingError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: "Expected HH:MM".to_string(),
    })
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
