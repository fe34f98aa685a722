use crate::config::CirculationConfig;
use crate::simulation::{Report, Simulation};
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Run a library circulation command script
#[derive(Parser, Debug)]
#[command(name = "library-circulation")]
#[command(about = "Run a library circulation command script and report the final state", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing catalog commands
    #[arg(value_name = "INPUT", help = "Path to the command script CSV file")]
    pub input_file: PathBuf,

    /// Final state report to write to stdout
    #[arg(
        long = "report",
        value_name = "REPORT",
        default_value = "patrons",
        help = "Report to print: 'patrons' for balances and held items, 'items' for item states"
    )]
    pub report: ReportType,

    /// Fine per overdue item per day
    #[arg(
        long = "overdue-penalty",
        value_name = "AMOUNT",
        help = "Fine added per overdue item per day (default: 0.10)"
    )]
    pub overdue_penalty: Option<Decimal>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose", help = "Log every catalog transition to stderr")]
    pub verbose: bool,
}

/// Available final-state reports
#[derive(Clone, Debug, ValueEnum)]
pub enum ReportType {
    Patrons,
    Items,
}

impl From<ReportType> for Report {
    fn from(report: ReportType) -> Self {
        match report {
            ReportType::Patrons => Report::Patrons,
            ReportType::Items => Report::Items,
        }
    }
}

impl CliArgs {
    /// Create a CirculationConfig from CLI arguments
    ///
    /// Falls back to the default penalty when none is given.
    pub fn to_config(&self) -> CirculationConfig {
        match self.overdue_penalty {
            Some(penalty) => CirculationConfig::new(penalty),
            None => CirculationConfig::default(),
        }
    }

    pub fn to_simulation(&self) -> Simulation {
        Simulation::new(self.to_config(), self.report.clone().into())
    }
}
