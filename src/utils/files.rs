use std::{
    fs::{self, File},
    io::{self, BufWriter},
    path::Path,
};

use crate::datasets::{frames, RecordSet};

/// Create a directory and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}

/// Write a record set to the given path as CSV, replacing any existing file
pub fn write_csv(path: &Path, records: &RecordSet) -> io::Result<()> {
    let writer = BufWriter::new(File::create(path)?);

    frames::write_csv(writer, records).map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
