pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{Cli, Command};
pub use crate::config::AppConfig;

pub use crate::adapters::catalog::{catalog_source_for, FileCatalogSource, HttpCatalogSource};
pub use crate::adapters::storage::{FileStore, MemoryStore};
pub use crate::core::booking::Barbershop;
pub use crate::core::catalog::{fallback_services, load_catalog, CatalogLoad};
pub use crate::core::store::BookingStore;
pub use crate::core::validator::{validate, validation_message, BusinessHours, ValidationError};
pub use crate::domain::model::{Booking, BookingForm, Service};
pub use crate::utils::error::{BookingError, Result};
