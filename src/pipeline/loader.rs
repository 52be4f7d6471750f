//! CSV loading with robust text decoding.

use crate::error::{ReportError, Result};
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, warn};

/// Load a CSV file into a frame.
///
/// Decoding never fails on invalid byte sequences: the raw bytes are read
/// first and any non-UTF-8 sequence is replaced with U+FFFD before parsing.
/// A missing or unreadable path is a [`ReportError::DataAccess`].
pub fn load_csv(path: impl AsRef<Path>) -> Result<DataFrame> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| ReportError::DataAccess {
        path: path.display().to_string(),
        source,
    })?;

    let content = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            warn!(
                "Input is not valid UTF-8; replacing invalid byte sequences ({})",
                path.display()
            );
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    };

    let df = read_frame(content)?;
    debug!("Dataset loaded: {:?}", df.shape());
    Ok(df)
}

fn read_frame(content: String) -> Result<DataFrame> {
    let cursor = Cursor::new(content);
    // Infer over the whole file: a column is numeric only when every
    // non-null value parses as a number.
    let df = CsvReadOptions::default()
        .with_infer_schema_length(None)
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_quote_char(Some(b'"')))
        .into_reader_with_file_handle(cursor)
        .finish()?;
    Ok(df)
}
