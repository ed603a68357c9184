use coverage::{CoverageRow, GeneKey, COVERAGE_COLUMN, REQUIRED_COLUMNS};
use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;
use std::{fs::File, io::Read, path::Path};

use crate::{data::CoverageTable, error::InputError};

#[derive(Debug, Deserialize)]
struct RawCoverageRecord {
    #[serde(rename = "GeneSymbol;Accession")]
    gene_key: GeneKey,
    #[serde(rename = "percentage30")]
    percentage: String,
}

pub fn load_coverage_table<P: AsRef<Path>>(path: P) -> Result<CoverageTable, InputError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    read_coverage_table(file)
}

pub fn read_coverage_table<R: Read>(reader: R) -> Result<CoverageTable, InputError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b'\t')
        .flexible(false)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    check_required_columns(&headers)?;

    let mut table = CoverageTable::new();
    let mut record = StringRecord::with_capacity(256, headers.len());
    while rdr.read_record(&mut record)? {
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let raw: RawCoverageRecord = record.deserialize(Some(&headers))?;

        let coverage_pct: f64 = raw.percentage.trim().parse().map_err(|_| InputError::InvalidRow {
            line,
            message: format!(
                "could not parse '{}' in column '{}' as a number",
                raw.percentage, COVERAGE_COLUMN
            ),
        })?;

        let row = CoverageRow::new(raw.gene_key, coverage_pct).map_err(|e| {
            InputError::InvalidRow {
                line,
                message: format!("{:#}", e),
            }
        })?;
        table.add_row(row);
    }

    if table.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(table)
}

fn check_required_columns(headers: &StringRecord) -> Result<(), InputError> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(InputError::MissingColumn(column));
        }
    }
    Ok(())
}
