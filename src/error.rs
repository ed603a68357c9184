use std::path::PathBuf;

use coverage::{COVERAGE_COLUMN, GENE_KEY_COLUMN};

/// Problems with the coverage report given as input. No output is written when
/// one of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Could not open input file {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input is not valid tab-separated text: {0}")]
    Malformed(#[from] csv::Error),

    #[error("Required column '{0}' not found in header")]
    MissingColumn(&'static str),

    #[error("Invalid record on line {line}: {message}")]
    InvalidRow { line: u64, message: String },

    #[error("Input Sambamba coverage report contains no data")]
    Empty,
}

impl InputError {
    pub fn expected_format() -> String {
        format!(
            "Expected a tab-separated Sambamba coverage report with a header row containing the columns '{}' and '{}'.",
            GENE_KEY_COLUMN, COVERAGE_COLUMN
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Could not create output file {path:?}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed writing report to {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Output(#[from] OutputError),
}
