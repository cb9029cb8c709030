pub mod booking;
pub mod catalog;
pub mod export;
pub mod store;
pub mod validator;

pub use crate::domain::model::{Booking, BookingForm, Service};
pub use crate::domain::ports::{CatalogSource, KeyValueStore};
pub use crate::utils::error::Result;
