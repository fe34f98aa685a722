//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `item`: library items, their kinds and locations
//! - `patron`: patron state
//! - `command`: catalog operations as data
//! - `error`: error types for the circulation engine

pub mod command;
pub mod error;
pub mod item;
pub mod patron;

pub use command::Command;
pub use error::CirculationError;
pub use item::{Day, ItemFormat, ItemId, ItemKind, LibraryItem, Location};
pub use patron::{Patron, PatronId};
