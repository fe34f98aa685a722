//! Patron-related types for the circulation engine
//!
//! This module defines the Patron structure tracking a borrower's fine
//! balance and the items they currently hold.

use super::error::CirculationError;
use super::item::ItemId;
use rust_decimal::Decimal;
use std::collections::BTreeSet;

/// Patron identifier
pub type PatronId = u32;

/// Library patron state
///
/// `held_items` mirrors the catalog's items: it contains exactly the ids of
/// the items whose holder is this patron. Only the catalog mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patron {
    id: PatronId,
    name: String,
    held_items: BTreeSet<ItemId>,
    balance: Decimal,
}

impl Patron {
    /// Create a new patron with no items and a zero balance
    pub fn new(id: PatronId, name: impl Into<String>) -> Self {
        Patron {
            id,
            name: name.into(),
            held_items: BTreeSet::new(),
            balance: Decimal::ZERO,
        }
    }

    /// Unique patron identifier
    pub fn id(&self) -> PatronId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accrued fines minus payments
    ///
    /// Can go negative: payments larger than the outstanding fine are accepted.
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Ids of the items currently checked out by this patron, ascending
    pub fn held_items(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.held_items.iter().copied()
    }

    /// Whether `item` is currently checked out to this patron
    pub fn holds_item(&self, item: ItemId) -> bool {
        self.held_items.contains(&item)
    }

    pub fn held_count(&self) -> usize {
        self.held_items.len()
    }

    /// Record a checkout; adding an id twice keeps one entry
    pub(crate) fn add_item(&mut self, item: ItemId) {
        self.held_items.insert(item);
    }

    /// No-op when the patron doesn't hold `item`
    pub(crate) fn remove_item(&mut self, item: ItemId) {
        self.held_items.remove(&item);
    }

    /// Add `delta` to the balance using checked arithmetic
    ///
    /// # Arguments
    ///
    /// * `delta` - Amount to add; negative for payments
    /// * `operation` - Name of the operation, used in the overflow error
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` and leaves the balance unchanged if the
    /// sum does not fit in a `Decimal`.
    pub(crate) fn adjust_balance(
        &mut self,
        delta: Decimal,
        operation: &str,
    ) -> Result<(), CirculationError> {
        self.balance = self
            .balance
            .checked_add(delta)
            .ok_or_else(|| CirculationError::arithmetic_overflow(operation, self.id))?;
        Ok(())
    }

    /// Take over the held items of a patron record being replaced
    pub(crate) fn inherit_items(&mut self, previous: Patron) {
        self.held_items = previous.held_items;
    }
}
