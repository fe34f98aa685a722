//! Circulation configuration
//!
//! Holds the tunable parameters of the catalog. Only the overdue penalty is
//! configurable; checkout lengths are fixed per item kind.

use rust_decimal::Decimal;
use tracing::warn;

/// Configuration for a `LibraryCatalog`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CirculationConfig {
    /// Fine added per overdue item per day
    pub overdue_penalty: Decimal,
}

impl Default for CirculationConfig {
    fn default() -> Self {
        Self {
            overdue_penalty: Self::DEFAULT_OVERDUE_PENALTY,
        }
    }
}

impl CirculationConfig {
    /// 0.10 per item per day
    pub const DEFAULT_OVERDUE_PENALTY: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

    /// Create a config with a custom penalty
    ///
    /// Negative penalties fall back to the default.
    pub fn new(overdue_penalty: Decimal) -> Self {
        let overdue_penalty = if overdue_penalty.is_sign_negative() {
            warn!(
                %overdue_penalty,
                default = %Self::DEFAULT_OVERDUE_PENALTY,
                "Invalid overdue penalty, using default"
            );
            Self::DEFAULT_OVERDUE_PENALTY
        } else {
            overdue_penalty
        };

        Self { overdue_penalty }
    }
}
