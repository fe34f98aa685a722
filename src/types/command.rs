//! Catalog commands
//!
//! A `Command` is one catalog operation with its arguments, as produced by the
//! command script reader and consumed by `LibraryCatalog::apply`.

use super::item::{ItemFormat, ItemId};
use super::patron::PatronId;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register (or replace) a copy
    AddItem {
        item: ItemId,
        title: String,
        format: ItemFormat,
    },

    /// Register (or replace) a patron
    AddPatron { patron: PatronId, name: String },

    CheckOut { patron: PatronId, item: ItemId },

    Return { item: ItemId },

    /// Place a hold on an item
    Request { patron: PatronId, item: ItemId },

    PayFine { patron: PatronId, amount: Decimal },

    /// Move the calendar forward, accruing overdue fines each day
    AdvanceDays { days: u32 },
}

impl Command {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddItem { format, .. } => format.kind().as_str(),
            Command::AddPatron { .. } => "patron",
            Command::CheckOut { .. } => "checkout",
            Command::Return { .. } => "return",
            Command::Request { .. } => "request",
            Command::PayFine { .. } => "pay",
            Command::AdvanceDays { .. } => "advance",
        }
    }
}
