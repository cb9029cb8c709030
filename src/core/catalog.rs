use crate::core::{CatalogSource, Service};

/// Built-in services used whenever the configured source cannot be read.
pub fn fallback_services() -> Vec<Service> {
    vec![
        Service::new(1, "Corte de pelo", 7500),
        Service::new(2, "Barba", 6000),
        Service::new(3, "Corte + Barba", 11500),
    ]
}

/// Outcome of a catalog load. Both arms carry a usable catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLoad {
    Fetched(Vec<Service>),
    Fallback {
        services: Vec<Service>,
        reason: String,
    },
}

impl CatalogLoad {
    pub fn services(&self) -> &[Service] {
        match self {
            CatalogLoad::Fetched(services) => services,
            CatalogLoad::Fallback { services, .. } => services,
        }
    }

    pub fn into_services(self) -> Vec<Service> {
        match self {
            CatalogLoad::Fetched(services) => services,
            CatalogLoad::Fallback { services, .. } => services,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, CatalogLoad::Fallback { .. })
    }

    pub fn fallback_reason(&self) -> Option<&str> {
        match self {
            CatalogLoad::Fetched(_) => None,
            CatalogLoad::Fallback { reason, .. } => Some(reason),
        }
    }
}

/// Fetches the catalog, degrading to [`fallback_services`] on any failure.
/// Never returns an error.
pub async fn load_catalog(source: &dyn CatalogSource) -> CatalogLoad {
    tracing::debug!("Loading service catalog from {}", source.describe());

    match source.fetch().await {
        Ok(services) => {
            tracing::info!(
                "Loaded {} services from {}",
                services.len(),
                source.describe()
            );
            CatalogLoad::Fetched(services)
        }
        Err(e) => {
            tracing::warn!(
                "Using built-in services, could not read {}: {}",
                source.describe(),
                e
            );
            CatalogLoad::Fallback {
                services: fallback_services(),
                reason: e.to_string(),
            }
        }
    }
}
