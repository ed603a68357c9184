pub mod gene_key;
pub mod row;

pub use gene_key::GeneKey;
pub use row::CoverageRow;

/// Read depth the coverage percentage is reported at.
pub const TARGET_DEPTH: u32 = 30;

/// Percentage of bases that must reach `TARGET_DEPTH` for a gene to pass.
pub const REQUIRED_PERCENTAGE: f64 = 100.0;

pub const GENE_KEY_COLUMN: &str = "GeneSymbol;Accession";
pub const COVERAGE_COLUMN: &str = "percentage30";

pub const REQUIRED_COLUMNS: [&str; 2] = [GENE_KEY_COLUMN, COVERAGE_COLUMN];
