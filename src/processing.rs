use ahash::AHashSet;
use coverage::CoverageRow;
use log::debug;

use crate::data::CoverageTable;

/// One report line: a gene below the required coverage and the RefSeq IDs of
/// the first failing row seen for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowCoverageGene {
    pub gene_symbol: String,
    pub refseq_ids: String,
}

impl From<CoverageRow> for LowCoverageGene {
    fn from(row: CoverageRow) -> Self {
        Self {
            gene_symbol: row.key.gene_symbol,
            refseq_ids: row.key.refseq_ids,
        }
    }
}

pub fn filter_low_coverage(table: CoverageTable) -> CoverageTable {
    table
        .into_iter()
        .filter(|row| !row.meets_requirement())
        .collect()
}

/// Keeps the first row per gene in input order, then sorts by gene symbol.
pub fn collapse_by_gene(table: CoverageTable) -> Vec<LowCoverageGene> {
    let mut seen: AHashSet<String> = AHashSet::new();
    let mut genes: Vec<LowCoverageGene> = Vec::new();

    for row in table {
        if seen.contains(row.gene_symbol()) {
            debug!(
                "Skipping additional row for {}: {}",
                row.gene_symbol(),
                row.refseq_ids()
            );
            continue;
        }
        seen.insert(row.gene_symbol().to_string());
        genes.push(row.into());
    }

    genes.sort_by(|a, b| a.gene_symbol.cmp(&b.gene_symbol));
    genes
}

pub fn find_low_coverage_genes(table: CoverageTable) -> Vec<LowCoverageGene> {
    let failing = filter_low_coverage(table);
    if failing.is_empty() {
        return Vec::new();
    }
    collapse_by_gene(failing)
}
