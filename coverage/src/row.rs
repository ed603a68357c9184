use anyhow::{bail, Result};

use crate::{gene_key::GeneKey, REQUIRED_PERCENTAGE};

#[derive(Debug, Clone, PartialEq)]
pub struct CoverageRow {
    pub key: GeneKey,
    coverage_pct: f64,
}

impl CoverageRow {
    pub fn new(key: GeneKey, coverage_pct: f64) -> Result<Self> {
        if !coverage_pct.is_finite() {
            bail!(
                "Invalid coverage for '{}': percentage ({}) is not a number",
                key.gene_symbol,
                coverage_pct
            )
        }
        if !(0.0..=100.0).contains(&coverage_pct) {
            bail!(
                "Invalid coverage for '{}': percentage ({}) must be between 0 and 100",
                key.gene_symbol,
                coverage_pct
            )
        }

        Ok(Self { key, coverage_pct })
    }

    pub fn gene_symbol(&self) -> &str {
        &self.key.gene_symbol
    }

    pub fn refseq_ids(&self) -> &str {
        &self.key.refseq_ids
    }

    pub fn coverage_pct(&self) -> f64 {
        self.coverage_pct
    }

    pub fn meets_requirement(&self) -> bool {
        self.coverage_pct >= REQUIRED_PERCENTAGE
    }
}
