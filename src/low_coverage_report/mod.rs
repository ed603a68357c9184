use bytesize::ByteSize;
use chrono::Local;
use humantime::format_duration;
use log::{info, warn};
use std::{fs, path::Path, time::Instant};

use crate::{
    argparser::Args,
    data_load::load_coverage_table,
    error::ReportError,
    processing::find_low_coverage_genes,
};

pub mod render;
pub mod writer;

pub use render::Report;
pub use writer::write_report;

pub fn low_coverage_report(args: &Args) -> Result<Report, ReportError> {
    let start = Instant::now();
    let inpath = Path::new(&args.input);
    let outpath = Path::new(&args.output);

    match fs::metadata(inpath) {
        Ok(meta) => info!(
            "Loading coverage report {:?} ({})",
            inpath,
            ByteSize::b(meta.len())
        ),
        Err(_) => info!("Loading coverage report {:?}", inpath),
    }
    let table = load_coverage_table(inpath)?;
    info!("Loaded {} coverage rows", table.len());

    let genes = find_low_coverage_genes(table);
    if genes.is_empty() {
        info!("All genes met the coverage requirement");
    } else {
        warn!("{} genes below the coverage requirement", genes.len());
    }

    let report = Report::new(Local::now(), inpath, genes);
    write_report(outpath, &report.render())?;

    info!(
        "Wrote report to {:?} in {}",
        outpath,
        format_duration(start.elapsed())
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn args(input: &Path, output: &Path) -> Args {
        Args {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
        }
    }

    #[test]
    fn test_report_written() -> anyhow::Result<()> {
        let mut coverage_file = NamedTempFile::new()?;
        writeln!(coverage_file, "GeneSymbol;Accession\tpercentage30")?;
        writeln!(coverage_file, "GeneB;NM_010\t90.0")?;
        writeln!(coverage_file, "GeneA;NM_001\t95.0")?;
        let dir = tempdir()?;
        let outpath = dir.path().join("report.txt");

        let report = low_coverage_report(&args(coverage_file.path(), &outpath))?;
        assert_eq!(report.genes.len(), 2);

        let written = fs::read_to_string(&outpath)?;
        assert_eq!(written, report.render());
        assert!(written.ends_with("#Gene\t#RefSeq IDs\nGeneA\tNM_001\nGeneB\tNM_010\n"));
        Ok(())
    }

    #[test]
    fn test_input_error_writes_nothing() -> anyhow::Result<()> {
        let mut coverage_file = NamedTempFile::new()?;
        writeln!(coverage_file, "GeneSymbol;Accession\tpercentage30")?;
        let dir = tempdir()?;
        let outpath = dir.path().join("report.txt");

        let result = low_coverage_report(&args(coverage_file.path(), &outpath));
        assert!(matches!(result, Err(ReportError::Input(InputError::Empty))));
        assert!(!outpath.exists());
        assert_eq!(fs::read_dir(dir.path())?.count(), 0);
        Ok(())
    }
}
