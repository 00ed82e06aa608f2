//! Aggregate risk scoring

use crate::detection::DetectionResult;
use crate::scoring::table::SensitivityTable;
use anyhow::Result;

/// Risk scorer over detection results
///
/// Folds a [`DetectionResult`] into one aggregate score: every matched
/// instance contributes its detector's sensitivity weight. The score is
/// uncapped; a text saturated with matches yields an arbitrarily large
/// value.
pub struct RiskScorer {
    table: SensitivityTable,
}

impl RiskScorer {
    /// Create a scorer with the built-in default weight table
    pub fn new() -> Result<Self> {
        Ok(Self {
            table: SensitivityTable::builtin()?,
        })
    }

    /// Create a scorer with a custom weight table
    pub fn with_table(table: SensitivityTable) -> Self {
        Self { table }
    }

    /// The weight table this scorer uses
    pub fn table(&self) -> &SensitivityTable {
        &self.table
    }

    /// Compute the aggregate risk score of a detection result
    ///
    /// Sums `weight(detector) * match_count` over every detector present in
    /// the result. Detectors without a weight contribute 0; the function
    /// never fails.
    pub fn score(&self, result: &DetectionResult) -> u64 {
        let mut risk: u64 = 0;

        for (_, detectors) in result.iter() {
            for (name, matches) in detectors {
                risk += u64::from(self.table.weight(name)) * matches.len() as u64;
            }
        }

        risk
    }
}
