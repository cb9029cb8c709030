// Adapters layer: concrete implementations for external systems (catalog feeds, storage).

pub mod catalog;
pub mod storage;
