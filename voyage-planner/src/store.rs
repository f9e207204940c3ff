//! Bounded in-memory store of saved itineraries.
//!
//! Saved itineraries are addressed by 1-based slot number in save order.
//! The store never evicts: once full, further saves fail.

use crate::domain::{Itinerary, ItineraryComparison};

/// Default number of itineraries a store holds.
pub const DEFAULT_CAPACITY: usize = 10;

/// Error returned when saving into a full store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("itinerary store is full ({capacity} saved)")]
pub struct StoreFull {
    pub capacity: usize,
}

/// Fixed-capacity list of saved itineraries.
#[derive(Debug, Clone)]
pub struct ItineraryStore {
    capacity: usize,
    itineraries: Vec<Itinerary>,
}

impl ItineraryStore {
    /// Create an empty store holding at most `capacity` itineraries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            itineraries: Vec::with_capacity(capacity),
        }
    }

    /// Save an itinerary and return its slot number (starting at 1).
    ///
    /// # Errors
    ///
    /// Returns `StoreFull` if the store is at capacity. The itinerary is
    /// not saved.
    pub fn save(&mut self, itinerary: Itinerary) -> Result<usize, StoreFull> {
        if self.is_full() {
            return Err(StoreFull {
                capacity: self.capacity,
            });
        }
        self.itineraries.push(itinerary);
        Ok(self.itineraries.len())
    }

    /// Returns the itinerary in a 1-based slot.
    pub fn get(&self, slot: usize) -> Option<&Itinerary> {
        slot.checked_sub(1).and_then(|i| self.itineraries.get(i))
    }

    /// Iterates over saved itineraries in save order.
    pub fn iter(&self) -> impl Iterator<Item = &Itinerary> {
        self.itineraries.iter()
    }

    /// Compares the itineraries in two slots (first minus second).
    pub fn compare(&self, first: usize, second: usize) -> Option<ItineraryComparison> {
        Some(self.get(first)?.compare(self.get(second)?))
    }

    /// Number of saved itineraries.
    pub fn len(&self) -> usize {
        self.itineraries.len()
    }

    /// Returns true if nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.itineraries.is_empty()
    }

    /// Returns true if no more itineraries can be saved.
    pub fn is_full(&self) -> bool {
        self.itineraries.len() >= self.capacity
    }

    /// Maximum number of itineraries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ItineraryStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}
