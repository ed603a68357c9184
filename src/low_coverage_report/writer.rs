use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::error::OutputError;

/// Writes the fully rendered report in one pass. The file is opened like any
/// other output: umask permissions apply and symlinks are followed.
pub fn write_report<P: AsRef<Path>>(outpath: P, contents: &str) -> Result<(), OutputError> {
    let outpath = outpath.as_ref();

    let outfile = File::create(outpath).map_err(|source| OutputError::Create {
        path: outpath.to_path_buf(),
        source,
    })?;

    let write_err = |source: std::io::Error| OutputError::Write {
        path: outpath.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(outfile);
    writer.write_all(contents.as_bytes()).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    Ok(())
}
