//! Streaming parser for delimited text exports

use std::io::Read;

use super::config::DelimitedConfig;
use crate::common::Result;

/// One parsed field: its column and text. Empty fields are not reported.
pub type Field = (u32, String);

/// Streaming parser for delimited text formats
pub struct DelimitedParser<'a, R: Read> {
    reader: &'a mut R,
    config: &'a DelimitedConfig,
    buffer: Vec<u8>,
    buffer_pos: usize,
    buffer_len: usize,
}

impl<'a, R: Read> DelimitedParser<'a, R> {
    /// Create a new text parser
    pub fn new(reader: &'a mut R, config: &'a DelimitedConfig) -> Self {
        DelimitedParser {
            reader,
            config,
            buffer: vec![0; config.buffer_size.max(1)],
            buffer_pos: 0,
            buffer_len: 0,
        }
    }

    /// Parse the next row, returning its non-empty fields.
    ///
    /// Returns `None` at end of input.
    pub fn parse_row(&mut self) -> Result<Option<Vec<Field>>> {
        let mut fields = Vec::new();
        let mut column = 0u32;
        let mut in_quotes = false;
        let mut current_field = Vec::new();
        let mut saw_any = false;

        loop {
            // Fill buffer if needed
            if self.buffer_pos >= self.buffer_len {
                self.buffer_len = self.reader.read(&mut self.buffer)?;
                self.buffer_pos = 0;

                if self.buffer_len == 0 {
                    // End of file
                    if saw_any {
                        self.finish_field(&mut current_field, column, &mut fields);
                        return Ok(Some(fields));
                    }
                    return Ok(None);
                }
            }

            let byte = self.buffer[self.buffer_pos];
            self.buffer_pos += 1;
            saw_any = true;

            match byte {
                b'\n' if !in_quotes => {
                    self.finish_field(&mut current_field, column, &mut fields);
                    return Ok(Some(fields));
                },
                // CR of a CRLF pair; LF ends the line
                b'\r' if !in_quotes => {},
                quote if quote == self.config.quote => {
                    if in_quotes {
                        // Doubled quote is an escaped quote, a single one closes the field
                        if self.peek()? == Some(self.config.quote) {
                            current_field.push(self.config.quote);
                            self.buffer_pos += 1;
                        } else {
                            in_quotes = false;
                        }
                    } else {
                        in_quotes = true;
                    }
                },
                delim if delim == self.config.delimiter && !in_quotes => {
                    self.finish_field(&mut current_field, column, &mut fields);
                    column += 1;
                },
                _ => current_field.push(byte),
            }
        }
    }

    /// Look at the next byte without consuming it, refilling the buffer if needed.
    fn peek(&mut self) -> Result<Option<u8>> {
        if self.buffer_pos >= self.buffer_len {
            self.buffer_len = self.reader.read(&mut self.buffer)?;
            self.buffer_pos = 0;
        }
        Ok((self.buffer_pos < self.buffer_len).then(|| self.buffer[self.buffer_pos]))
    }

    /// Finish parsing a field and add it to the fields vector if non-empty
    fn finish_field(&self, current_field: &mut Vec<u8>, column: u32, fields: &mut Vec<Field>) {
        let field_bytes = std::mem::take(current_field);

        // Invalid UTF-8 sequences are replaced rather than rejected
        let text = String::from_utf8(field_bytes)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned());

        let text = if self.config.trim_whitespace {
            text.trim().to_string()
        } else {
            text
        };

        if !text.is_empty() {
            fields.push((column, text));
        }
    }
}
