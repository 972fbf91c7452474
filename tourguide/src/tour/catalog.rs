//! Collection of completed tours.

use std::sync::Arc;

use indexmap::IndexMap;

use super::Tour;

/// Completed tours keyed by id, listed in insertion order.
///
/// Inserting a tour whose id is already present replaces the earlier tour
/// in place: it keeps the listing slot of the tour it replaced.
#[derive(Debug, Default, Clone)]
pub struct TourCatalog {
    tours: IndexMap<String, Arc<Tour>>,
}

impl TourCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tour, replacing any tour with the same id.
    ///
    /// Returns the replaced tour, if any.
    pub fn insert(&mut self, tour: Tour) -> Option<Arc<Tour>> {
        self.tours.insert(tour.id().to_string(), Arc::new(tour))
    }

    /// Look up a tour by id.
    pub fn get(&self, id: &str) -> Option<&Arc<Tour>> {
        self.tours.get(id)
    }

    /// True if a tour with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.tours.contains_key(id)
    }

    /// Iterate tours in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Tour>> {
        self.tours.values()
    }

    /// Number of tours.
    pub fn len(&self) -> usize {
        self.tours.len()
    }

    /// True if no tours have been added.
    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }
}
