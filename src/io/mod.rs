//! I/O module
//!
//! Handles command script parsing and report output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, report serialization)
//! - `reader` - Command script reader with iterator interface

pub mod csv_format;
pub mod reader;

pub use csv_format::{
    convert_csv_record, write_items_csv, write_patrons_csv, CsvRecord, MAX_ADVANCE_DAYS,
};
pub use reader::CommandReader;
