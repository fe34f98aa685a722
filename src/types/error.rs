//! Error types for the library circulation engine
//!
//! This module defines every error that catalog operations and the command
//! script driver can produce.
//!
//! # Error Categories
//!
//! - **Circulation Errors**: unknown patron or item, checkout/return/hold rule
//!   violations, balance overflow. These are ordinary outcomes of catalog
//!   operations.
//! - **Input Errors**: missing files, malformed CSV rows, unknown commands.

use super::item::ItemId;
use super::patron::PatronId;
use thiserror::Error;

/// Main error type for the circulation engine
///
/// Every variant is recoverable: the failed operation leaves the catalog
/// untouched and the caller decides how to report it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CirculationError {
    /// No patron is registered under the id
    #[error("Patron {patron} not found")]
    PatronNotFound {
        /// The unknown patron id
        patron: PatronId,
    },

    /// No item is registered under the id
    #[error("Item {item} not found")]
    ItemNotFound {
        /// The unknown item id
        item: ItemId,
    },

    /// The item is already lent out
    #[error("Item {item} is already checked out")]
    AlreadyCheckedOut {
        /// The requested item
        item: ItemId,
    },

    /// The item sits on the hold shelf for another patron
    #[error("Item {item} is on hold for another patron")]
    HeldByOther {
        /// The requested item
        item: ItemId,
    },

    /// The item cannot be returned because it is not lent out
    #[error("Item {item} is not checked out")]
    NotCheckedOut {
        /// The returned item
        item: ItemId,
    },

    /// The item already carries a hold request
    #[error("Item {item} is already on hold for patron {requester}")]
    AlreadyOnHold {
        /// The requested item
        item: ItemId,
        /// Patron owning the existing request
        requester: PatronId,
    },

    /// A balance change would overflow
    ///
    /// The operation is rejected and the balance is left unchanged.
    #[error("Arithmetic overflow in {operation} for patron {patron}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Patron whose balance was being changed
        patron: PatronId,
    },

    /// Command script not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Unknown command name in a script row
    #[error("Invalid command '{op}'")]
    InvalidCommand {
        /// The unrecognised command string
        op: String,
    },

    /// A command row lacks a field the command needs
    #[error("{op} command is missing {field}")]
    MissingField {
        /// Command name
        op: String,
        /// Name of the missing column
        field: String,
    },

    /// Amount column is not a decimal number
    #[error("Invalid amount '{amount}'")]
    InvalidAmount {
        /// The rejected amount string
        amount: String,
    },

    /// Day count of an `advance` row is above the per-row limit
    #[error("Invalid day count {days}: at most {max} days per advance")]
    InvalidDays {
        /// The rejected day count
        days: u32,
        /// Largest accepted day count
        max: u32,
    },
}

impl From<std::io::Error> for CirculationError {
    fn from(error: std::io::Error) -> Self {
        CirculationError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for CirculationError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        CirculationError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl CirculationError {
    pub fn patron_not_found(patron: PatronId) -> Self {
        CirculationError::PatronNotFound { patron }
    }

    pub fn item_not_found(item: ItemId) -> Self {
        CirculationError::ItemNotFound { item }
    }

    pub fn already_checked_out(item: ItemId) -> Self {
        CirculationError::AlreadyCheckedOut { item }
    }

    pub fn held_by_other(item: ItemId) -> Self {
        CirculationError::HeldByOther { item }
    }

    pub fn not_checked_out(item: ItemId) -> Self {
        CirculationError::NotCheckedOut { item }
    }

    pub fn already_on_hold(item: ItemId, requester: PatronId) -> Self {
        CirculationError::AlreadyOnHold { item, requester }
    }

    pub fn invalid_command(op: &str) -> Self {
        CirculationError::InvalidCommand { op: op.to_string() }
    }

    pub fn missing_field(op: &str, field: &str) -> Self {
        CirculationError::MissingField {
            op: op.to_string(),
            field: field.to_string(),
        }
    }

    pub fn invalid_amount(amount: &str) -> Self {
        CirculationError::InvalidAmount {
            amount: amount.to_string(),
        }
    }

    pub fn arithmetic_overflow(operation: &str, patron: PatronId) -> Self {
        CirculationError::ArithmeticOverflow {
            operation: operation.to_string(),
            patron,
        }
    }

    pub fn invalid_days(days: u32, max: u32) -> Self {
        CirculationError::InvalidDays { days, max }
    }
}
