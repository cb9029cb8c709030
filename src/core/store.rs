use crate::core::{Booking, KeyValueStore};
use crate::utils::error::Result;

pub const DEFAULT_STORAGE_KEY: &str = "turnos";

/// Bookings in creation order, mirrored to a single key of durable storage.
pub struct BookingStore<S: KeyValueStore> {
    storage: S,
    key: String,
    bookings: Vec<Booking>,
}

impl<S: KeyValueStore> BookingStore<S> {
    /// Reads whatever is persisted under `key`. Missing, unreadable or corrupt
    /// data starts an empty store instead of failing.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let bookings = match storage.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Booking>>(&raw) {
                Ok(bookings) => bookings,
                Err(e) => {
                    tracing::warn!("Ignoring corrupt bookings under '{}': {}", key, e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Could not read bookings under '{}': {}", key, e);
                Vec::new()
            }
        };

        tracing::debug!("Loaded {} bookings from '{}'", bookings.len(), key);
        Self {
            storage,
            key,
            bookings,
        }
    }

    /// Overwrites the stored array with the in-memory sequence.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string(&self.bookings)?;
        self.storage.set(&self.key, &json)?;
        tracing::debug!("Saved {} bookings to '{}'", self.bookings.len(), self.key);
        Ok(())
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn get(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Sum of booking prices, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.bookings
            .iter()
            .fold(0u64, |acc, b| acc.saturating_add(b.price))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Appends and persists. On a failed save the append is undone.
    pub fn add(&mut self, booking: Booking) -> Result<()> {
        self.bookings.push(booking);
        if let Err(e) = self.save() {
            self.bookings.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Returns whether a booking was removed. Persists either way; on a
    /// failed save the booking is put back in its slot.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let removed = self
            .bookings
            .iter()
            .position(|b| b.id == id)
            .map(|index| (index, self.bookings.remove(index)));

        if let Err(e) = self.save() {
            if let Some((index, booking)) = removed {
                self.bookings.insert(index, booking);
            }
            return Err(e);
        }
        Ok(removed.is_some())
    }

    /// Empties the store. On a failed save the previous bookings are kept.
    pub fn clear(&mut self) -> Result<()> {
        let previous = std::mem::take(&mut self.bookings);
        if let Err(e) = self.save() {
            self.bookings = previous;
            return Err(e);
        }
        Ok(())
    }
}
