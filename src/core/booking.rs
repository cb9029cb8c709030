use crate::core::store::BookingStore;
use crate::core::validator::{validate, BusinessHours, ValidationError};
use crate::core::{Booking, BookingForm, KeyValueStore, Service};
use crate::domain::model::{parse_date, parse_time};
use crate::utils::error::{BookingError, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use uuid::Uuid;

/// The whole appointment book: the current catalog and the persisted
/// bookings. All mutation goes through here.
pub struct Barbershop<S: KeyValueStore> {
    catalog: Vec<Service>,
    store: BookingStore<S>,
    hours: BusinessHours,
}

impl<S: KeyValueStore> Barbershop<S> {
    pub fn new(catalog: Vec<Service>, store: BookingStore<S>) -> Self {
        Self {
            catalog,
            store,
            hours: BusinessHours::default(),
        }
    }

    pub fn with_hours(mut self, hours: BusinessHours) -> Self {
        self.hours = hours;
        self
    }

    pub fn catalog(&self) -> &[Service] {
        &self.catalog
    }

    /// Swaps in a freshly loaded catalog. Existing bookings keep their
    /// copied names and prices.
    pub fn set_catalog(&mut self, catalog: Vec<Service>) {
        self.catalog = catalog;
    }

    pub fn hours(&self) -> &BusinessHours {
        &self.hours
    }

    pub fn find_service(&self, service_id: u32) -> Option<&Service> {
        self.catalog.iter().find(|s| s.id == service_id)
    }

    pub fn bookings(&self) -> &[Booking] {
        self.store.bookings()
    }

    pub fn total(&self) -> u64 {
        self.store.total()
    }

    pub fn store(&self) -> &BookingStore<S> {
        &self.store
    }

    /// Books `service_id` for the client. Field contents are not checked
    /// here; run the form through the validator first, or use [`Self::book`].
    pub fn create(
        &mut self,
        client_name: &str,
        service_id: u32,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<Booking> {
        let service = self
            .find_service(service_id)
            .ok_or_else(|| BookingError::ServiceNotFound {
                service_id: service_id.to_string(),
            })?;

        let booking = Booking {
            id: Uuid::new_v4().to_string(),
            client_name: client_name.to_string(),
            service_name: service.name.clone(),
            price: service.price,
            date,
            time,
        };

        self.store.add(booking.clone())?;
        tracing::info!(
            "Booked {} for {} on {} at {} (id {})",
            booking.service_name,
            booking.client_name,
            booking.date,
            booking.time.format("%H:%M"),
            booking.id
        );
        Ok(booking)
    }

    /// Validates the raw form against `now` and books it.
    pub fn book(&mut self, form: &BookingForm, now: NaiveDateTime) -> Result<Booking> {
        validate(form, &self.hours, now)?;

        let service_id = form.service_id.trim();
        let service_id: u32 = service_id
            .parse()
            .map_err(|_| BookingError::ServiceNotFound {
                service_id: service_id.to_string(),
            })?;
        // Both already parsed once during validation.
        let date = parse_date(&form.date).ok_or(ValidationError::DateMissing)?;
        let time = parse_time(&form.time).ok_or(ValidationError::TimeMissing)?;

        self.create(form.client_name.trim(), service_id, date, time)
    }

    /// Removes the booking with `id`. An unknown id is not an error.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let removed = self.store.remove(id)?;
        if removed {
            tracing::info!("Removed booking {}", id);
        } else {
            tracing::debug!("No booking with id {}, nothing removed", id);
        }
        Ok(removed)
    }

    pub fn clear(&mut self) -> Result<()> {
        let count = self.store.len();
        self.store.clear()?;
        tracing::info!("Cleared {} bookings", count);
        Ok(())
    }
}
