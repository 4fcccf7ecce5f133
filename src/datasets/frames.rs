use std::io::{Cursor, Write};

use polars::prelude::*;

/// Cell contents read as missing values, in addition to empty cells
pub static NULL_VALUES: [&str; 6] = ["NA", "N/A", "NaN", "nan", "NULL", "null"];

/// Parse CSV bytes with a header row, inferring each column's type from every row
pub fn read_csv(bytes: Vec<u8>) -> PolarsResult<DataFrame> {
    let null_values = NullValues::AllColumns(NULL_VALUES.iter().map(|v| v.to_string()).collect());

    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .with_parse_options(CsvParseOptions::default().with_null_values(Some(null_values)))
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
}

/// Write a frame as CSV with a header row and no index column
pub fn write_csv<W: Write>(writer: W, records: &DataFrame) -> PolarsResult<()> {
    // The writer takes `&mut`; clones share the underlying buffers
    let mut records = records.clone();

    CsvWriter::new(writer)
        .include_header(true)
        .finish(&mut records)
}
