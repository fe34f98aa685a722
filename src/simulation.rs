//! Command script simulation
//!
//! This module runs a command script against a fresh `LibraryCatalog` and
//! writes the final state as a CSV report. It orchestrates, delegating:
//! - script parsing to `CommandReader`
//! - circulation rules to `LibraryCatalog`
//! - report output to the `csv_format` writers
//!
//! Rows that fail to parse and operations the catalog rejects are logged and
//! skipped; only file and output failures abort a run.

use crate::config::CirculationConfig;
use crate::core::LibraryCatalog;
use crate::io::csv_format::{write_items_csv, write_patrons_csv};
use crate::io::CommandReader;
use crate::types::CirculationError;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Which final-state report to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Report {
    /// One row per patron with balance and held items
    #[default]
    Patrons,
    /// One row per item with its circulation state
    Items,
}

/// Counts of what happened during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub applied: u64,
    pub rejected: u64,
    pub malformed: u64,
}

/// Runs command scripts and reports the final catalog state
///
/// ```no_run
/// use library_circulation::simulation::{Report, Simulation};
/// use std::path::Path;
///
/// let simulation = Simulation::default();
/// simulation
///     .run(Path::new("script.csv"), &mut std::io::stdout())
///     .expect("simulation failed");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    config: CirculationConfig,
    report: Report,
}

impl Simulation {
    pub fn new(config: CirculationConfig, report: Report) -> Self {
        Simulation { config, report }
    }

    /// Apply every command of the script at `input_path`, then write the report
    ///
    /// # Errors
    ///
    /// Returns an error if the script can't be opened or the report can't be
    /// written. Bad rows and rejected operations are logged, not returned.
    pub fn run(
        &self,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<RunSummary, CirculationError> {
        let (catalog, summary) = self.simulate(input_path)?;

        match self.report {
            Report::Patrons => write_patrons_csv(&catalog.patrons(), output)?,
            Report::Items => write_items_csv(&catalog.items(), output)?,
        }

        Ok(summary)
    }

    /// Apply the script and hand back the resulting catalog
    pub fn simulate(
        &self,
        input_path: &Path,
    ) -> Result<(LibraryCatalog, RunSummary), CirculationError> {
        let mut catalog = LibraryCatalog::with_config(self.config.clone());
        let mut reader = CommandReader::new(input_path)?;
        let mut summary = RunSummary::default();

        while let Some(result) = reader.next() {
            let line = reader.line();
            let command = match result {
                Ok(command) => command,
                Err(e) => {
                    warn!(line, error = %e, "Skipping malformed row");
                    summary.malformed += 1;
                    continue;
                }
            };

            let name = command.name();
            match catalog.apply(command) {
                Ok(()) => summary.applied += 1,
                Err(e) => {
                    warn!(line, command = name, error = %e, "Command rejected");
                    summary.rejected += 1;
                }
            }
        }

        info!(
            applied = summary.applied,
            rejected = summary.rejected,
            malformed = summary.malformed,
            day = catalog.current_day(),
            penalty = %catalog.config().overdue_penalty,
            "Simulation finished"
        );
        Ok((catalog, summary))
    }
}
