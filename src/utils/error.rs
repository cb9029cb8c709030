use crate::core::validator::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Servicio no encontrado: {service_id}")]
    ServiceNotFound { service_id: String },

    #[error("Catalog unavailable: {reason}")]
    CatalogUnavailable { reason: String },

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl BookingError {
    /// Message shown to the person at the counter, without internal detail.
    pub fn user_friendly_message(&self) -> String {
        match self {
            BookingError::ServiceNotFound { .. } => "Servicio no encontrado".to_string(),
            BookingError::Validation(e) => e.to_string(),
            BookingError::CatalogUnavailable { .. } | BookingError::ApiError(_) => {
                "No se pudo leer el catálogo de servicios".to_string()
            }
            BookingError::IoError(_) | BookingError::SerializationError(_) => {
                "No se pudieron guardar los turnos".to_string()
            }
            BookingError::CsvError(_) => "No se pudo exportar el listado".to_string(),
            BookingError::ConfigError { .. } | BookingError::InvalidConfigValueError { .. } => {
                format!("Configuración inválida: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BookingError::ServiceNotFound { .. } => {
                "Run `barber-booking services` to see the available service ids"
            }
            BookingError::Validation(_) => "Fix the highlighted field and try again",
            BookingError::CatalogUnavailable { .. } | BookingError::ApiError(_) => {
                "Check the catalog source in the config file"
            }
            BookingError::IoError(_) | BookingError::SerializationError(_) => {
                "Check that the data directory exists and is writable"
            }
            BookingError::CsvError(_) => "Check the export destination",
            BookingError::ConfigError { .. } | BookingError::InvalidConfigValueError { .. } => {
                "Review barber-booking.toml or the command-line overrides"
            }
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            BookingError::ConfigError { .. } | BookingError::InvalidConfigValueError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, BookingError>;
