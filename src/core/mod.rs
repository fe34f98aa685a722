//! Core business logic module
//!
//! This module contains the circulation components:
//! - `catalog` - Circulation rules and orchestration
//! - `holdings` - Item registry
//! - `members` - Patron registry

pub mod catalog;
pub mod holdings;
pub mod members;

pub use catalog::LibraryCatalog;
pub use holdings::Holdings;
pub use members::Members;
