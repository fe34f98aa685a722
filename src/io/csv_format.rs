//! CSV format handling for command scripts and state reports
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization of script rows
//! - Conversion from CSV records to catalog commands
//! - Patron and item report serialization
//!
//! All functions are pure (no file access) for easy testing.

use crate::types::{
    CirculationError, Command, ItemFormat, ItemId, ItemKind, LibraryItem, Patron, PatronId,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// One row of a command script
///
/// Columns: `op,patron,item,name,creator,amount,days`. `name` is the item
/// title for item rows and the patron's name for `patron` rows. Columns a
/// command doesn't use may be left empty.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct CsvRecord {
    pub op: String,
    #[serde(default)]
    pub patron: Option<PatronId>,
    #[serde(default)]
    pub item: Option<ItemId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub days: Option<u32>,
}

/// Largest day count a single `advance` row may carry (about a century)
pub const MAX_ADVANCE_DAYS: u32 = 36_500;

fn require<T>(value: Option<T>, op: &str, field: &str) -> Result<T, CirculationError> {
    value.ok_or_else(|| CirculationError::missing_field(op, field))
}

fn require_text(value: Option<String>, op: &str, field: &str) -> Result<String, CirculationError> {
    require(value.filter(|text| !text.trim().is_empty()), op, field)
}

/// Convert a CsvRecord to a Command
///
/// Command names are case-insensitive. `advance` without `days` moves one day
/// and accepts at most `MAX_ADVANCE_DAYS`.
///
/// # Errors
///
/// - `InvalidCommand` for an unknown op
/// - `MissingField` when a column the command needs is empty
/// - `InvalidAmount` when a payment amount is not a decimal number
/// - `InvalidDays` when an `advance` row exceeds `MAX_ADVANCE_DAYS`
pub fn convert_csv_record(record: CsvRecord) -> Result<Command, CirculationError> {
    let op = record.op.trim().to_lowercase();

    let kind = match op.as_str() {
        "book" => Some(ItemKind::Book),
        "album" => Some(ItemKind::Album),
        "movie" => Some(ItemKind::Movie),
        _ => None,
    };
    if let Some(kind) = kind {
        return Ok(Command::AddItem {
            item: require(record.item, &op, "item")?,
            title: require_text(record.name, &op, "name")?,
            format: ItemFormat::from_kind(kind, require_text(record.creator, &op, "creator")?),
        });
    }

    let command = match op.as_str() {
        "patron" => Command::AddPatron {
            patron: require(record.patron, &op, "patron")?,
            name: require_text(record.name, &op, "name")?,
        },
        "checkout" => Command::CheckOut {
            patron: require(record.patron, &op, "patron")?,
            item: require(record.item, &op, "item")?,
        },
        "return" => Command::Return {
            item: require(record.item, &op, "item")?,
        },
        "request" => Command::Request {
            patron: require(record.patron, &op, "patron")?,
            item: require(record.item, &op, "item")?,
        },
        "pay" => {
            let amount = require_text(record.amount, &op, "amount")?;
            Command::PayFine {
                patron: require(record.patron, &op, "patron")?,
                amount: Decimal::from_str(amount.trim())
                    .map_err(|_| CirculationError::invalid_amount(&amount))?,
            }
        }
        "advance" => match record.days.unwrap_or(1) {
            days if days > MAX_ADVANCE_DAYS => {
                return Err(CirculationError::invalid_days(days, MAX_ADVANCE_DAYS));
            }
            days => Command::AdvanceDays { days },
        },
        _ => return Err(CirculationError::invalid_command(&record.op)),
    };

    Ok(command)
}

/// Write patron states to CSV format
///
/// Columns: `patron,name,balance,items`. Balances have two decimal places and
/// held item ids are joined with `;`. Rows are sorted by patron id.
pub fn write_patrons_csv(patrons: &[&Patron], output: &mut dyn Write) -> Result<(), CirculationError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(["patron", "name", "balance", "items"])?;

    let mut sorted = patrons.to_vec();
    sorted.sort_by_key(|patron| patron.id());

    for patron in sorted {
        let items: Vec<String> = patron.held_items().map(|id| id.to_string()).collect();
        writer.write_record(&[
            patron.id().to_string(),
            patron.name().to_string(),
            format!("{:.2}", patron.balance()),
            items.join(";"),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write item states to CSV format
///
/// Columns: `item,kind,title,creator,location,holder,requester,checkout_day`,
/// with empty cells for absent values. Rows are sorted by item id.
pub fn write_items_csv(items: &[&LibraryItem], output: &mut dyn Write) -> Result<(), CirculationError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record([
        "item",
        "kind",
        "title",
        "creator",
        "location",
        "holder",
        "requester",
        "checkout_day",
    ])?;

    let mut sorted = items.to_vec();
    sorted.sort_by_key(|item| item.id());

    for item in sorted {
        writer.write_record(&[
            item.id().to_string(),
            item.kind().to_string(),
            item.title().to_string(),
            item.creator().to_string(),
            item.location().to_string(),
            optional(item.holder()),
            optional(item.requester()),
            optional(item.checkout_day()),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
