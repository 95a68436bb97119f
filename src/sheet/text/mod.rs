//! Delimited text (CSV, TSV) loading.
//!
//! Spreadsheet decoding proper is done outside this crate. This module covers
//! the common case of a timetable sheet exported to delimited text, and is what
//! the test fixtures are written in: each non-empty field becomes a text cell
//! at its (line, field) position. Merge regions cannot be expressed in text
//! exports and are attached afterwards with [`Sheet::with_merge`].
//!
//! # Example
//!
//! ```rust
//! use timetable_sheet::sheet::text::{parse_delimited, DelimitedConfig};
//! use timetable_sheet::sheet::{CellAddress, Worksheet};
//!
//! let sheet = parse_delimited("\t1-21б\n8.00\tФизика", &DelimitedConfig::tsv());
//! assert_eq!(sheet.cell_text(CellAddress::new(1, 1)), Some("Физика"));
//! ```

pub mod config;
pub mod parser;

pub use config::DelimitedConfig;
pub use parser::DelimitedParser;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::common::Result;
use crate::sheet::{CellAddress, Sheet};

/// Read a delimited export into a sheet.
pub fn read_delimited<R: Read>(reader: &mut R, config: &DelimitedConfig) -> Result<Sheet> {
    let mut parser = DelimitedParser::new(reader, config);
    let mut sheet = Sheet::new(config.sheet_name.clone());

    let mut row = 0u32;
    while let Some(fields) = parser.parse_row()? {
        for (col, text) in fields {
            sheet.set_cell(CellAddress::new(row, col), text);
        }
        row += 1;
    }

    Ok(sheet)
}

/// Open a delimited export from a file path.
pub fn load_delimited<P: AsRef<Path>>(path: P, config: &DelimitedConfig) -> Result<Sheet> {
    let file = File::open(path)?;
    let mut reader = BufReader::with_capacity(config.buffer_size.max(1), file);
    read_delimited(&mut reader, config)
}

/// Parse delimited text already held in memory.
pub fn parse_delimited(text: &str, config: &DelimitedConfig) -> Sheet {
    let mut bytes = text.as_bytes();
    // Reading from a byte slice cannot fail
    read_delimited(&mut bytes, config).unwrap_or_else(|_| Sheet::new(config.sheet_name.clone()))
}

#[cfg(test)]
mod tests;
