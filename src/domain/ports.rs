use crate::domain::model::Service;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Durable key-value storage holding serialized state. Access is synchronous
/// and local to the process.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Where the service catalog comes from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Service>>;

    /// Human-readable location, used in log lines.
    fn describe(&self) -> String;
}
