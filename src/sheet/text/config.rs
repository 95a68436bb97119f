//! Configuration for delimited text exports

/// Configuration for reading CSV/TSV exports of a timetable sheet
#[derive(Debug, Clone)]
pub struct DelimitedConfig {
    /// Field delimiter character
    pub delimiter: u8,
    /// Quote character for quoted fields
    pub quote: u8,
    /// Whether to trim whitespace from fields
    pub trim_whitespace: bool,
    /// Name given to the resulting sheet
    pub sheet_name: String,
    /// Buffer size for reading
    pub buffer_size: usize,
}

impl Default for DelimitedConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',       // CSV default
            quote: b'"',           // Standard CSV quoting
            trim_whitespace: false, // Session text keeps its spacing
            sheet_name: "Sheet1".to_string(),
            buffer_size: 8192, // 8KB buffer
        }
    }
}

impl DelimitedConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    /// Enable/disable whitespace trimming
    pub fn with_trim_whitespace(mut self, trim: bool) -> Self {
        self.trim_whitespace = trim;
        self
    }

    /// Set the sheet name
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    /// Create TSV (tab-separated) configuration
    pub fn tsv() -> Self {
        Self::new().with_delimiter(b'\t')
    }

    /// Create semicolon-separated configuration
    pub fn semicolon() -> Self {
        Self::new().with_delimiter(b';')
    }
}
