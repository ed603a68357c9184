use chrono::{DateTime, Local};
use coverage::{REQUIRED_PERCENTAGE, TARGET_DEPTH};
use std::path::Path;

use crate::processing::LowCoverageGene;

pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

pub struct Report {
    pub generated: DateTime<Local>,
    pub input_name: String,
    pub genes: Vec<LowCoverageGene>,
}

impl Report {
    pub fn new<P: AsRef<Path>>(
        generated: DateTime<Local>,
        input_path: P,
        genes: Vec<LowCoverageGene>,
    ) -> Self {
        let input_path = input_path.as_ref();
        let input_name = input_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| input_path.display().to_string());

        Self {
            generated,
            input_name,
            genes,
        }
    }

    pub fn all_covered(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn summary(&self) -> String {
        if self.all_covered() {
            format!(
                "**All genes had {}% coverage at {}x or higher**",
                REQUIRED_PERCENTAGE, TARGET_DEPTH
            )
        } else {
            format!(
                "**Genes listed below did NOT meet the required minimum coverage of {}x**",
                TARGET_DEPTH
            )
        }
    }

    /// The all-covered report ends on the summary line without a trailing newline.
    pub fn render(&self) -> String {
        let mut out = format!(
            "Report Generated: {}\nInput File: {}\n\n{}",
            self.generated.format(TIMESTAMP_FORMAT),
            self.input_name,
            self.summary()
        );

        if self.all_covered() {
            return out;
        }

        out.push_str("\n\n#Gene\t#RefSeq IDs\n");
        for gene in &self.genes {
            out.push_str(&format!("{}\t{}\n", gene.gene_symbol, gene.refseq_ids));
        }
        out
    }
}
