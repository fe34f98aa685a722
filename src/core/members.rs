//! Patron registry
//!
//! This module provides the `Members` struct which owns the state of every
//! registered patron.
//!
//! Members is responsible for:
//! - Storing patrons by id (insert-or-replace)
//! - Lookups for the catalog's operations
//! - Sorted patron listings for reports

use crate::types::{Patron, PatronId};
use std::collections::HashMap;

/// Owns all registered patrons
#[derive(Debug, Default)]
pub struct Members {
    /// Map of patron ids to patron state
    patrons: HashMap<PatronId, Patron>,
}

impl Members {
    /// Create an empty registry
    ///
    /// # Returns
    ///
    /// A new Members with no patrons
    pub fn new() -> Self {
        Members {
            patrons: HashMap::new(),
        }
    }

    /// Insert a patron, keyed by its id
    ///
    /// # Arguments
    ///
    /// * `patron` - The patron to store
    ///
    /// # Returns
    ///
    /// * `Some(Patron)` - The record previously stored under the same id
    /// * `None` - If the id was new
    pub fn insert(&mut self, patron: Patron) -> Option<Patron> {
        self.patrons.insert(patron.id(), patron)
    }

    /// Look up a patron by id
    pub fn get(&self, id: PatronId) -> Option<&Patron> {
        self.patrons.get(&id)
    }

    /// Mutable lookup for the catalog's transitions
    pub fn get_mut(&mut self, id: PatronId) -> Option<&mut Patron> {
        self.patrons.get_mut(&id)
    }

    /// Check whether a patron is registered
    ///
    /// # Arguments
    ///
    /// * `id` - The patron id to check
    ///
    /// # Returns
    ///
    /// true if a patron with this id exists, false otherwise
    pub fn contains(&self, id: PatronId) -> bool {
        self.patrons.contains_key(&id)
    }

    /// Mutable access to every patron, in no particular order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Patron> {
        self.patrons.values_mut()
    }

    /// Get all patrons sorted by id
    ///
    /// Sorting keeps report output deterministic.
    pub fn all(&self) -> Vec<&Patron> {
        let mut patrons: Vec<&Patron> = self.patrons.values().collect();
        patrons.sort_by_key(|patron| patron.id());
        patrons
    }
}
