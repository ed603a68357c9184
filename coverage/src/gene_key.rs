use serde::de::{Deserialize, Deserializer};
use std::fmt::Display;

pub const GENE_KEY_SEPARATOR: char = ';';

/// Gene symbol and RefSeq IDs as stored in the combined `GeneSymbol;Accession` column.
#[derive(Debug, Hash, PartialEq, Eq, Clone)]
pub struct GeneKey {
    pub gene_symbol: String,
    pub refseq_ids: String,
}

impl Display for GeneKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.gene_symbol, GENE_KEY_SEPARATOR, self.refseq_ids)
    }
}

impl GeneKey {
    pub fn new(gene_symbol: String, refseq_ids: String) -> Self {
        Self {
            gene_symbol,
            refseq_ids,
        }
    }

    /// Splits on the first `;` only. Without a separator the whole value is the
    /// gene symbol and the RefSeq IDs are empty.
    pub fn from_str(composite: &str) -> Self {
        match composite.split_once(GENE_KEY_SEPARATOR) {
            Some((gene_symbol, refseq_ids)) => {
                Self::new(gene_symbol.to_string(), refseq_ids.to_string())
            }
            None => Self::new(composite.to_string(), String::new()),
        }
    }
}

impl<'de> Deserialize<'de> for GeneKey {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(GeneKey::from_str(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_separator() {
        let key = GeneKey::from_str("BRCA1;NM_007294.3");
        assert_eq!(key.gene_symbol, "BRCA1");
        assert_eq!(key.refseq_ids, "NM_007294.3");
    }

    #[test]
    fn test_split_first_separator_only() {
        let key = GeneKey::from_str("BRCA2;NM_000059.3;NM_000059.4");
        assert_eq!(key.gene_symbol, "BRCA2");
        assert_eq!(key.refseq_ids, "NM_000059.3;NM_000059.4");
    }

    #[test]
    fn test_missing_separator() {
        let key = GeneKey::from_str("GeneC");
        assert_eq!(key.gene_symbol, "GeneC");
        assert_eq!(key.refseq_ids, "");
    }

    #[test]
    fn test_trailing_separator() {
        let key = GeneKey::from_str("GeneD;");
        assert_eq!(key.gene_symbol, "GeneD");
        assert_eq!(key.refseq_ids, "");
    }

    #[test]
    fn test_display_restores_composite() {
        let key = GeneKey::from_str("TP53;NM_000546.5");
        assert_eq!(key.to_string(), "TP53;NM_000546.5");
    }
}
