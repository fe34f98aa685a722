//! Command script reader with iterator interface
//!
//! Provides a streaming iterator over catalog commands from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual row errors are yielded as Err variants in the iterator;
//!   `line()` reports the script line of the last yielded row
//!
//! ```no_run
//! use library_circulation::io::CommandReader;
//! use std::path::Path;
//!
//! let mut reader = CommandReader::new(Path::new("script.csv")).unwrap();
//! while let Some(result) = reader.next() {
//!     match result {
//!         Ok(command) => println!("line {}: {:?}", reader.line(), command),
//!         Err(e) => eprintln!("line {}: {}", reader.line(), e),
//!     }
//! }
//! ```

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{CirculationError, Command};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Streaming command script reader
#[derive(Debug)]
pub struct CommandReader {
    reader: csv::Reader<File>,
    headers: StringRecord,
    record: StringRecord,
    line: u64,
}

impl CommandReader {
    /// Open a command script
    ///
    /// The CSV reader trims whitespace from all fields and allows rows to omit
    /// trailing empty columns.
    ///
    /// # Errors
    ///
    /// - `FileNotFound` if the path does not exist
    /// - `IoError` for any other failure opening the file
    /// - `ParseError` if the header row can't be read
    pub fn new(path: &Path) -> Result<Self, CirculationError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CirculationError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => CirculationError::from(e),
        })?;

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);
        let headers = reader.headers()?.clone();

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
            line: 1,
        })
    }

    /// Script line of the most recently yielded row (the header is line 1)
    ///
    /// Blank lines are skipped by the parser but still counted.
    pub fn line(&self) -> u64 {
        self.line
    }
}

impl Iterator for CommandReader {
    type Item = Result<Command, CirculationError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                self.line = self
                    .record
                    .position()
                    .map_or(self.line + 1, |pos| pos.line());

                Some(
                    self.record
                        .deserialize::<CsvRecord>(Some(&self.headers))
                        .map_err(CirculationError::from)
                        .and_then(convert_csv_record),
                )
            }
            Err(e) => {
                self.line = e.position().map_or(self.line + 1, |pos| pos.line());
                Some(Err(CirculationError::from(e)))
            }
        }
    }
}
