//! Library Circulation Engine
//! # Overview
//!
//! This library models the circulation desk of a small lending library: items
//! held by the library, patrons who borrow them, checkout / return / hold
//! workflows, and overdue fines accrued over a simulated calendar.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (LibraryItem, Patron, Command, errors)
//! - [`config`] - Circulation settings (overdue penalty)
//! - [`core`] - Business logic components:
//!   - [`core::catalog`] - Circulation rules and orchestration
//!   - [`core::holdings`] - Item registry
//!   - [`core::members`] - Patron registry
//! - [`io`] - Command script parsing and report output
//! - [`simulation`] - Runs a command script against a catalog
//! - [`cli`] - CLI arguments parsing
//!
//! # Item Locations
//!
//! - **ON_SHELF**: available to anyone
//! - **ON_HOLD_SHELF**: available, but reserved for the patron who requested it
//! - **CHECKED_OUT**: lent to a patron; books for 21 days, albums for 14,
//!   movies for 7
//!
//! Every day an item stays out past its checkout length adds 0.10 to its
//! holder's balance.
//!
//! ```
//! use library_circulation::{LibraryCatalog, LibraryItem, Location, Patron};
//! use rust_decimal::Decimal;
//!
//! let mut catalog = LibraryCatalog::new();
//! catalog.register_item(LibraryItem::book(1, "Dune", "Herbert"));
//! catalog.register_patron(Patron::new(1, "Al"));
//!
//! catalog.check_out(1, 1).unwrap();
//! catalog.advance_days(22);
//! assert_eq!(catalog.find_patron(1).unwrap().balance(), Decimal::new(10, 2));
//!
//! catalog.return_item(1).unwrap();
//! assert_eq!(catalog.find_item(1).unwrap().location(), Location::OnShelf);
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod logging;
pub mod simulation;
pub mod types;

pub use crate::config::CirculationConfig;
pub use crate::core::LibraryCatalog;
pub use crate::simulation::{Report, RunSummary, Simulation};
pub use crate::types::{
    CirculationError, Command, Day, ItemFormat, ItemId, ItemKind, LibraryItem, Location, Patron,
    PatronId,
};
