//! Library catalog
//!
//! This module provides the `LibraryCatalog` that owns every item and patron
//! and drives all circulation between them. Items and patrons refer to each
//! other by id only; the catalog's registries are the single owners, and every
//! cross-entity change goes through one of the operations below.
//!
//! The catalog enforces:
//! - Checkout eligibility (not already out, not reserved for someone else)
//! - Hold precedence (a returned item waits on the hold shelf for its requester)
//! - At most one outstanding hold per item
//! - Daily overdue fine accrual

use crate::config::CirculationConfig;
use crate::core::holdings::Holdings;
use crate::core::members::Members;
use crate::types::{
    CirculationError, Command, Day, ItemId, LibraryItem, Location, Patron, PatronId,
};
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Circulation state of one library
#[derive(Debug)]
pub struct LibraryCatalog {
    holdings: Holdings,
    members: Members,
    current_day: Day,
    config: CirculationConfig,
}

impl LibraryCatalog {
    /// Create an empty catalog on day 0 with the default configuration
    pub fn new() -> Self {
        Self::with_config(CirculationConfig::default())
    }

    /// Create an empty catalog on day 0
    ///
    /// # Arguments
    ///
    /// * `config` - Circulation settings, such as the overdue penalty
    pub fn with_config(config: CirculationConfig) -> Self {
        LibraryCatalog {
            holdings: Holdings::new(),
            members: Members::new(),
            current_day: 0,
            config,
        }
    }

    /// Settings the catalog was created with
    pub fn config(&self) -> &CirculationConfig {
        &self.config
    }

    /// Days advanced since the catalog was created
    pub fn current_day(&self) -> Day {
        self.current_day
    }

    /// Register an item, replacing any item with the same id
    ///
    /// A replaced copy that was checked out is dropped from its holder's
    /// items; the new record starts on the shelf.
    ///
    /// # Arguments
    ///
    /// * `item` - The item to add, normally fresh from `LibraryItem::new`
    pub fn register_item(&mut self, item: LibraryItem) {
        let id = item.id();
        let Some(previous) = self.holdings.insert(item) else {
            debug!(item = id, "Registered item");
            return;
        };

        if let Some(holder) = previous.holder() {
            if let Some(patron) = self.members.get_mut(holder) {
                patron.remove_item(id);
            }
        }
        warn!(
            item = id,
            previous_location = %previous.location(),
            "Replaced existing item"
        );
    }

    /// Register a patron, replacing any patron with the same id
    ///
    /// The replacement keeps the items checked out under that id, so items
    /// and patrons stay consistent. Its balance is the new record's.
    ///
    /// # Arguments
    ///
    /// * `patron` - The patron to add
    pub fn register_patron(&mut self, patron: Patron) {
        let id = patron.id();
        let Some(previous) = self.members.insert(patron) else {
            debug!(patron = id, "Registered patron");
            return;
        };

        warn!(patron = id, held = previous.held_count(), "Replaced existing patron");
        if let Some(current) = self.members.get_mut(id) {
            current.inherit_items(previous);
        }
    }

    /// Look up an item by id
    ///
    /// # Returns
    ///
    /// * `Some(&LibraryItem)` - If the item is registered
    /// * `None` - Otherwise
    pub fn find_item(&self, id: ItemId) -> Option<&LibraryItem> {
        self.holdings.get(id)
    }

    /// Look up a patron by id
    ///
    /// # Returns
    ///
    /// * `Some(&Patron)` - If the patron is registered
    /// * `None` - Otherwise
    pub fn find_patron(&self, id: PatronId) -> Option<&Patron> {
        self.members.get(id)
    }

    /// All items sorted by id
    pub fn items(&self) -> Vec<&LibraryItem> {
        self.holdings.all()
    }

    /// All patrons sorted by id
    pub fn patrons(&self) -> Vec<&Patron> {
        self.members.all()
    }

    /// Check an item out to a patron
    ///
    /// The item records the holder and today's day; a hold placed by the same
    /// patron is fulfilled and cleared.
    ///
    /// # Arguments
    ///
    /// * `patron_id` - The borrowing patron
    /// * `item_id` - The item to lend
    ///
    /// # Errors
    ///
    /// - `PatronNotFound` / `ItemNotFound` for unknown ids
    /// - `AlreadyCheckedOut` if the item is lent out
    /// - `HeldByOther` if the item is on the hold shelf for a different patron
    pub fn check_out(&mut self, patron_id: PatronId, item_id: ItemId) -> Result<(), CirculationError> {
        let patron = self
            .members
            .get_mut(patron_id)
            .ok_or_else(|| CirculationError::patron_not_found(patron_id))?;
        let item = self
            .holdings
            .get_mut(item_id)
            .ok_or_else(|| CirculationError::item_not_found(item_id))?;

        match item.location {
            Location::CheckedOut => return Err(CirculationError::already_checked_out(item_id)),
            Location::OnHoldShelf if item.requester != Some(patron_id) => {
                return Err(CirculationError::held_by_other(item_id));
            }
            _ => {}
        }

        item.holder = Some(patron_id);
        item.checkout_day = Some(self.current_day);
        item.location = Location::CheckedOut;
        if item.requester == Some(patron_id) {
            item.requester = None;
        }
        patron.add_item(item_id);

        debug!(
            patron = patron_id,
            item = item_id,
            day = self.current_day,
            "Checked out"
        );
        Ok(())
    }

    /// Return a checked out item
    ///
    /// The item goes to the hold shelf when another patron has requested it,
    /// otherwise back to the shelf.
    ///
    /// # Errors
    ///
    /// - `ItemNotFound` for an unknown id
    /// - `NotCheckedOut` if the item is not lent out
    pub fn return_item(&mut self, item_id: ItemId) -> Result<(), CirculationError> {
        let item = self
            .holdings
            .get_mut(item_id)
            .ok_or_else(|| CirculationError::item_not_found(item_id))?;

        if item.location != Location::CheckedOut {
            return Err(CirculationError::not_checked_out(item_id));
        }

        let holder = item.holder.take();
        if let Some(patron) = holder.and_then(|id| self.members.get_mut(id)) {
            patron.remove_item(item_id);
        }

        item.location = match item.requester {
            Some(requester) if Some(requester) != holder => Location::OnHoldShelf,
            _ => Location::OnShelf,
        };
        item.checkout_day = None;

        debug!(item = item_id, location = %item.location, "Returned");
        Ok(())
    }

    /// Place a hold on an item for a patron
    ///
    /// An item on the shelf moves to the hold shelf; an item that is out keeps
    /// its location until it is returned.
    ///
    /// # Arguments
    ///
    /// * `patron_id` - The requesting patron
    /// * `item_id` - The requested item
    ///
    /// # Errors
    ///
    /// - `PatronNotFound` / `ItemNotFound` for unknown ids
    /// - `AlreadyOnHold` if any patron already requested the item
    pub fn request_hold(&mut self, patron_id: PatronId, item_id: ItemId) -> Result<(), CirculationError> {
        if !self.members.contains(patron_id) {
            return Err(CirculationError::patron_not_found(patron_id));
        }
        let item = self
            .holdings
            .get_mut(item_id)
            .ok_or_else(|| CirculationError::item_not_found(item_id))?;

        if let Some(requester) = item.requester {
            return Err(CirculationError::already_on_hold(item_id, requester));
        }

        item.requester = Some(patron_id);
        if item.location == Location::OnShelf {
            item.location = Location::OnHoldShelf;
        }

        debug!(patron = patron_id, item = item_id, location = %item.location, "Hold placed");
        Ok(())
    }

    /// Subtract a payment from a patron's balance
    ///
    /// Overpayment is accepted and leaves a negative balance.
    ///
    /// # Arguments
    ///
    /// * `patron_id` - The paying patron
    /// * `amount` - Amount paid; any value is accepted
    ///
    /// # Errors
    ///
    /// - `PatronNotFound` for an unknown id
    /// - `ArithmeticOverflow` if the new balance does not fit in a `Decimal`;
    ///   the balance is left unchanged
    pub fn pay_fine(&mut self, patron_id: PatronId, amount: Decimal) -> Result<(), CirculationError> {
        let patron = self
            .members
            .get_mut(patron_id)
            .ok_or_else(|| CirculationError::patron_not_found(patron_id))?;

        patron.adjust_balance(-amount, "fine payment")?;

        debug!(patron = patron_id, %amount, balance = %patron.balance(), "Fine paid");
        Ok(())
    }

    /// Advance the calendar by one day and accrue overdue fines
    ///
    /// Every held item more than its checkout length past its checkout day
    /// adds one penalty to its holder's balance. There is no cap. A fine that
    /// would overflow a patron's balance is skipped for that day and logged.
    pub fn advance_day(&mut self) {
        self.current_day = self.current_day.saturating_add(1);
        let today = self.current_day;
        let penalty = self.config.overdue_penalty;
        let holdings = &self.holdings;

        for patron in self.members.iter_mut() {
            let overdue = patron
                .held_items()
                .filter_map(|id| holdings.get(id))
                .filter(|item| item.is_overdue(today))
                .count();

            if overdue == 0 {
                continue;
            }

            let id = patron.id();
            let accrued = penalty
                .checked_mul(Decimal::from(overdue))
                .ok_or_else(|| CirculationError::arithmetic_overflow("overdue fine", id))
                .and_then(|fine| patron.adjust_balance(fine, "overdue fine").map(|()| fine));

            match accrued {
                Ok(fine) => debug!(patron = id, overdue, %fine, day = today, "Overdue fines accrued"),
                Err(e) => warn!(patron = id, overdue, day = today, error = %e, "Overdue fine skipped"),
            }
        }
    }

    /// Advance the calendar by `days` days, accruing fines for each
    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.advance_day();
        }
    }

    /// Run a single command against the catalog
    ///
    /// Registration and `AdvanceDays` always succeed; every other command
    /// returns the result of the matching operation.
    pub fn apply(&mut self, command: Command) -> Result<(), CirculationError> {
        match command {
            Command::AddItem {
                item,
                title,
                format,
            } => {
                self.register_item(LibraryItem::new(item, title, format));
                Ok(())
            }
            Command::AddPatron { patron, name } => {
                self.register_patron(Patron::new(patron, name));
                Ok(())
            }
            Command::CheckOut { patron, item } => self.check_out(patron, item),
            Command::Return { item } => self.return_item(item),
            Command::Request { patron, item } => self.request_hold(patron, item),
            Command::PayFine { patron, amount } => self.pay_fine(patron, amount),
            Command::AdvanceDays { days } => {
                self.advance_days(days);
                Ok(())
            }
        }
    }
}

impl Default for LibraryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemFormat;
    use rstest::rstest;

    fn cents(value: i64) -> Decimal {
        Decimal::new(value, 2)
    }

    /// Catalog with patrons 1 (Al) and 2 (Bo) and one item of each kind:
    /// book 1, album 2, movie 3
    fn sample_catalog() -> LibraryCatalog {
        let mut catalog = LibraryCatalog::new();
        catalog.register_patron(Patron::new(1, "Al"));
        catalog.register_patron(Patron::new(2, "Bo"));
        catalog.register_item(LibraryItem::book(1, "Dune", "Herbert"));
        catalog.register_item(LibraryItem::album(2, "Low", "Bowie"));
        catalog.register_item(LibraryItem::movie(3, "Alien", "Scott"));
        catalog
    }

    fn location(catalog: &LibraryCatalog, item: ItemId) -> Location {
        catalog.find_item(item).unwrap().location()
    }

    fn balance(catalog: &LibraryCatalog, patron: PatronId) -> Decimal {
        catalog.find_patron(patron).unwrap().balance()
    }

    #[test]
    fn test_new_catalog_starts_on_day_zero() {
        let catalog = LibraryCatalog::new();
        assert_eq!(catalog.current_day(), 0);
        assert!(catalog.items().is_empty());
        assert!(catalog.patrons().is_empty());
    }

    #[test]
    fn test_find_missing_entities() {
        let catalog = sample_catalog();
        assert!(catalog.find_item(99).is_none());
        assert!(catalog.find_patron(99).is_none());
    }

    #[test]
    fn test_check_out_sets_holder_and_day() {
        let mut catalog = sample_catalog();
        catalog.advance_days(3);

        catalog.check_out(1, 1).unwrap();

        let item = catalog.find_item(1).unwrap();
        assert_eq!(item.location(), Location::CheckedOut);
        assert_eq!(item.holder(), Some(1));
        assert_eq!(item.checkout_day(), Some(3));
        assert!(catalog.find_patron(1).unwrap().holds_item(1));
    }

    #[rstest]
    #[case::unknown_patron(9, 1, CirculationError::PatronNotFound { patron: 9 })]
    #[case::unknown_item(1, 9, CirculationError::ItemNotFound { item: 9 })]
    #[case::unknown_both(9, 9, CirculationError::PatronNotFound { patron: 9 })]
    fn test_check_out_lookup_failures(
        #[case] patron: PatronId,
        #[case] item: ItemId,
        #[case] expected: CirculationError,
    ) {
        let mut catalog = sample_catalog();
        assert_eq!(catalog.check_out(patron, item), Err(expected));
    }

    #[test]
    fn test_check_out_already_checked_out() {
        let mut catalog = sample_catalog();
        catalog.check_out(1, 1).unwrap();

        assert_eq!(
            catalog.check_out(2, 1),
            Err(CirculationError::AlreadyCheckedOut { item: 1 })
        );
        assert_eq!(
            catalog.check_out(1, 1),
            Err(CirculationError::AlreadyCheckedOut { item: 1 })
        );
        assert_eq!(catalog.find_item(1).unwrap().holder(), Some(1));
    }

    #[test]
    fn test_check_out_on_hold_shelf_by_other_patron_fails() {
        let mut catalog = sample_catalog();
        catalog.request_hold(2, 3).unwrap();

        assert_eq!(
            catalog.check_out(1, 3),
            Err(CirculationError::HeldByOther { item: 3 })
        );
        assert_eq!(location(&catalog, 3), Location::OnHoldShelf);
        assert_eq!(catalog.find_patron(1).unwrap().held_count(), 0);
    }

    #[test]
    fn test_check_out_by_requester_clears_request() {
        let mut catalog = sample_catalog();
        catalog.request_hold(2, 3).unwrap();

        catalog.check_out(2, 3).unwrap();

        let item = catalog.find_item(3).unwrap();
        assert_eq!(item.location(), Location::CheckedOut);
        assert_eq!(item.requester(), None);
        assert_eq!(item.holder(), Some(2));
    }

    #[test]
    fn test_return_to_shelf() {
        let mut catalog = sample_catalog();
        catalog.check_out(1, 1).unwrap();

        catalog.return_item(1).unwrap();

        let item = catalog.find_item(1).unwrap();
        assert_eq!(item.location(), Location::OnShelf);
        assert_eq!(item.holder(), None);
        assert_eq!(item.checkout_day(), None);
        assert_eq!(catalog.find_patron(1).unwrap().held_count(), 0);
    }

    #[rstest]
    #[case::unknown_item(9, CirculationError::ItemNotFound { item: 9 })]
    #[case::on_shelf(1, CirculationError::NotCheckedOut { item: 1 })]
    fn test_return_failures(#[case] item: ItemId, #[case] expected: CirculationError) {
        let mut catalog = sample_catalog();
        assert_eq!(catalog.return_item(item), Err(expected));
    }

    #[test]
    fn test_return_item_on_hold_shelf_is_not_checked_out() {
        let mut catalog = sample_catalog();
        catalog.request_hold(1, 2).unwrap();

        assert_eq!(
            catalog.return_item(2),
            Err(CirculationError::NotCheckedOut { item: 2 })
        );
        assert_eq!(location(&catalog, 2), Location::OnHoldShelf);
    }

    #[test]
    fn test_return_own_request_goes_to_shelf() {
        let mut catalog = sample_catalog();
        catalog.check_out(1, 1).unwrap();
        catalog.request_hold(1, 1).unwrap();

        catalog.return_item(1).unwrap();

        let item = catalog.find_item(1).unwrap();
        assert_eq!(item.location(), Location::OnShelf);
        assert_eq!(item.requester(), Some(1));
    }

    #[rstest]
    #[case::unknown_patron(9, 1, CirculationError::PatronNotFound { patron: 9 })]
    #[case::unknown_item(1, 9, CirculationError::ItemNotFound { item: 9 })]
    fn test_request_hold_lookup_failures(
        #[case] patron: PatronId,
        #[case] item: ItemId,
        #[case] expected: CirculationError,
    ) {
        let mut catalog = sample_catalog();
        assert_eq!(catalog.request_hold(patron, item), Err(expected));
    }

    #[test]
    fn test_request_hold_on_shelf_moves_to_hold_shelf() {
        let mut catalog = sample_catalog();

        catalog.request_hold(1, 1).unwrap();

        let item = catalog.find_item(1).unwrap();
        assert_eq!(item.location(), Location::OnHoldShelf);
        assert_eq!(item.requester(), Some(1));
    }

    #[test]
    fn test_request_hold_on_checked_out_item_keeps_location() {
        let mut catalog = sample_catalog();
        catalog.check_out(1, 1).unwrap();

        catalog.request_hold(2, 1).unwrap();

        let item = catalog.find_item(1).unwrap();
        assert_eq!(item.location(), Location::CheckedOut);
        assert_eq!(item.requester(), Some(2));
    }

    #[rstest]
    #[case::on_hold_shelf(false)]
    #[case::checked_out(true)]
    fn test_second_request_fails_regardless_of_location(#[case] checked_out: bool) {
        let mut catalog = sample_catalog();
        if checked_out {
            catalog.check_out(2, 1).unwrap();
        }
        catalog.request_hold(1, 1).unwrap();

        assert_eq!(
            catalog.request_hold(2, 1),
            Err(CirculationError::AlreadyOnHold {
                item: 1,
                requester: 1
            })
        );
        assert_eq!(
            catalog.request_hold(1, 1),
            Err(CirculationError::AlreadyOnHold {
                item: 1,
                requester: 1
            })
        );
    }

    #[test]
    fn test_pay_fine_reduces_balance() {
        let mut catalog = sample_catalog();
        catalog.check_out(1, 3).unwrap();
        catalog.advance_days(10);
        assert_eq!(balance(&catalog, 1), cents(30));

        catalog.pay_fine(1, cents(20)).unwrap();

        assert_eq!(balance(&catalog, 1), cents(10));
    }

    #[test]
    fn test_pay_fine_overpayment_goes_negative() {
        let mut catalog = sample_catalog();

        catalog.pay_fine(1, cents(500)).unwrap();

        assert_eq!(balance(&catalog, 1), cents(-500));
    }

    #[test]
    fn test_pay_fine_unknown_patron() {
        let mut catalog = sample_catalog();
        assert_eq!(
            catalog.pay_fine(9, cents(100)),
            Err(CirculationError::PatronNotFound { patron: 9 })
        );
    }

    #[test]
    fn test_pay_fine_overflow_is_rejected() {
        let mut catalog = sample_catalog();
        catalog.pay_fine(1, Decimal::MAX).unwrap();

        assert_eq!(
            catalog.pay_fine(1, Decimal::MAX),
            Err(CirculationError::ArithmeticOverflow {
                operation: "fine payment".to_string(),
                patron: 1
            })
        );
        assert_eq!(balance(&catalog, 1), -Decimal::MAX);

        catalog.pay_fine(1, Decimal::MIN).unwrap();
        assert_eq!(balance(&catalog, 1), Decimal::ZERO);
    }

    #[test]
    fn test_overflowing_fine_is_skipped() {
        let mut catalog = LibraryCatalog::with_config(CirculationConfig::new(Decimal::MAX));
        catalog.register_patron(Patron::new(1, "Al"));
        catalog.register_patron(Patron::new(2, "Bo"));
        catalog.register_item(LibraryItem::movie(1, "Alien", "Scott"));
        catalog.register_item(LibraryItem::movie(2, "Heat", "Mann"));
        catalog.register_item(LibraryItem::movie(3, "Ran", "Kurosawa"));
        catalog.check_out(1, 1).unwrap();
        catalog.check_out(2, 2).unwrap();
        catalog.check_out(2, 3).unwrap();

        // day 8 is the first overdue day; day 9 would overflow patron 1
        catalog.advance_days(9);

        assert_eq!(catalog.current_day(), 9);
        assert_eq!(balance(&catalog, 1), Decimal::MAX);
        // two overdue items at the maximum penalty never fit
        assert_eq!(balance(&catalog, 2), Decimal::ZERO);
    }

    #[rstest]
    #[case::book_on_time(1, 21, 0)]
    #[case::book_one_day_late(1, 22, 10)]
    #[case::album_on_time(2, 14, 0)]
    #[case::album_late(2, 20, 60)]
    #[case::movie_late(3, 30, 230)]
    fn test_advance_day_accrues_overdue_fines(
        #[case] item: ItemId,
        #[case] days: u32,
        #[case] expected_cents: i64,
    ) {
        let mut catalog = sample_catalog();
        catalog.check_out(1, item).unwrap();

        catalog.advance_days(days);

        assert_eq!(catalog.current_day(), days);
        assert_eq!(balance(&catalog, 1), cents(expected_cents));
    }

    #[test]
    fn test_advance_day_fines_each_overdue_item() {
        let mut catalog = sample_catalog();
        catalog.check_out(1, 2).unwrap();
        catalog.check_out(1, 3).unwrap();
        catalog.check_out(2, 1).unwrap();

        // album is 1 day late, movie 8 days late, book on time
        catalog.advance_days(15);

        assert_eq!(balance(&catalog, 1), cents(90));
        assert_eq!(balance(&catalog, 2), Decimal::ZERO);
    }

    #[test]
    fn test_returned_item_stops_accruing() {
        let mut catalog = sample_catalog();
        catalog.check_out(1, 3).unwrap();
        catalog.advance_days(9);
        catalog.return_item(3).unwrap();

        catalog.advance_days(5);

        assert_eq!(balance(&catalog, 1), cents(20));
    }

    #[test]
    fn test_custom_overdue_penalty() {
        let mut catalog = LibraryCatalog::with_config(CirculationConfig::new(Decimal::ONE));
        catalog.register_patron(Patron::new(1, "Al"));
        catalog.register_item(LibraryItem::movie(1, "Alien", "Scott"));
        catalog.check_out(1, 1).unwrap();

        catalog.advance_days(10);

        assert_eq!(balance(&catalog, 1), Decimal::new(3, 0));
    }

    #[test]
    fn test_dune_scenario() {
        let mut catalog = LibraryCatalog::new();
        catalog.register_item(LibraryItem::book(1, "Dune", "Herbert"));
        catalog.register_patron(Patron::new(1, "Al"));

        catalog.check_out(1, 1).unwrap();
        let item = catalog.find_item(1).unwrap();
        assert_eq!(item.location(), Location::CheckedOut);
        assert_eq!(item.checkout_day(), Some(0));

        catalog.advance_days(22);
        assert_eq!(balance(&catalog, 1), cents(10));

        catalog.return_item(1).unwrap();
        assert_eq!(location(&catalog, 1), Location::OnShelf);
    }

    #[test]
    fn test_album_hold_scenario() {
        let mut catalog = sample_catalog();

        catalog.check_out(1, 2).unwrap();
        catalog.request_hold(2, 2).unwrap();
        assert_eq!(location(&catalog, 2), Location::CheckedOut);

        catalog.return_item(2).unwrap();
        assert_eq!(location(&catalog, 2), Location::OnHoldShelf);

        assert_eq!(
            catalog.check_out(1, 2),
            Err(CirculationError::HeldByOther { item: 2 })
        );

        catalog.check_out(2, 2).unwrap();
        let item = catalog.find_item(2).unwrap();
        assert_eq!(item.requester(), None);
        assert_eq!(item.holder(), Some(2));
    }

    #[test]
    fn test_replacing_checked_out_item_detaches_holder() {
        let mut catalog = sample_catalog();
        catalog.check_out(1, 1).unwrap();

        catalog.register_item(LibraryItem::book(1, "Dune", "Frank Herbert"));

        assert_eq!(location(&catalog, 1), Location::OnShelf);
        assert!(!catalog.find_patron(1).unwrap().holds_item(1));
    }

    #[test]
    fn test_replacing_patron_keeps_held_items() {
        let mut catalog = sample_catalog();
        catalog.check_out(1, 1).unwrap();

        catalog.register_patron(Patron::new(1, "Alice"));

        let patron = catalog.find_patron(1).unwrap();
        assert_eq!(patron.name(), "Alice");
        assert!(patron.holds_item(1));
        catalog.return_item(1).unwrap();
        assert_eq!(catalog.find_patron(1).unwrap().held_count(), 0);
    }

    #[test]
    fn test_apply_dispatches_commands() {
        let mut catalog = LibraryCatalog::new();

        catalog
            .apply(Command::AddItem {
                item: 5,
                title: "Heat".to_string(),
                format: ItemFormat::movie("Mann"),
            })
            .unwrap();
        catalog
            .apply(Command::AddPatron {
                patron: 1,
                name: "Al".to_string(),
            })
            .unwrap();
        catalog.apply(Command::CheckOut { patron: 1, item: 5 }).unwrap();
        catalog.apply(Command::AdvanceDays { days: 9 }).unwrap();
        catalog
            .apply(Command::PayFine {
                patron: 1,
                amount: cents(5),
            })
            .unwrap();

        assert_eq!(catalog.current_day(), 9);
        assert_eq!(balance(&catalog, 1), cents(15));
        assert_eq!(
            catalog.apply(Command::Request { patron: 2, item: 5 }),
            Err(CirculationError::PatronNotFound { patron: 2 })
        );
        catalog.apply(Command::Return { item: 5 }).unwrap();
        assert_eq!(location(&catalog, 5), Location::OnShelf);
    }

    #[test]
    fn test_catalog_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<LibraryCatalog>();
    }
}
