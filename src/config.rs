//! Configuration for sort pipeline runs

use crate::error::{SortError, SortResult};

/// Default record separator.
pub const DEFAULT_SEPARATOR: char = ',';

/// Main configuration structure for a pipeline run
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// Record separator; a space splits on whitespace runs
    pub separator: char,
    /// Inline input value
    pub input: Option<String>,
    /// File to read input from; takes precedence over the inline value
    pub input_file: Option<String>,
    /// Decode gzip input
    pub input_gzip: bool,
    /// Decode base64 input
    pub input_base64: bool,
    /// Output file path (stdout when unset)
    pub output_file: Option<String>,
    /// Encode gzip output
    pub output_gzip: bool,
    /// Encode base64 output
    pub output_base64: bool,
    /// Debug logging
    pub debug: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            input: None,
            input_file: None,
            input_gzip: false,
            input_base64: false,
            output_file: None,
            output_gzip: false,
            output_base64: false,
            debug: false,
        }
    }
}

impl SortConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the record separator
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set the inline input
    pub fn with_input(mut self, input: &str) -> Self {
        self.input = Some(input.to_string());
        self
    }

    /// Set the input file
    pub fn with_input_file(mut self, path: &str) -> Self {
        self.input_file = Some(path.to_string());
        self
    }

    /// Enable gzip decoding of the input
    pub fn with_input_gzip(mut self, gzip: bool) -> Self {
        self.input_gzip = gzip;
        self
    }

    /// Enable base64 decoding of the input
    pub fn with_input_base64(mut self, base64: bool) -> Self {
        self.input_base64 = base64;
        self
    }

    /// Set the output file
    pub fn with_output_file(mut self, path: &str) -> Self {
        self.output_file = Some(path.to_string());
        self
    }

    /// Enable gzip encoding of the output
    pub fn with_output_gzip(mut self, gzip: bool) -> Self {
        self.output_gzip = gzip;
        self
    }

    /// Enable base64 encoding of the output
    pub fn with_output_base64(mut self, base64: bool) -> Self {
        self.output_base64 = base64;
        self
    }

    /// Enable debug logging
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// The inline input, with blank values treated as absent
    pub fn inline_input(&self) -> Option<&str> {
        self.input
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// The input file path, with blank values treated as absent
    pub fn input_path(&self) -> Option<&str> {
        self.input_file
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// The output file path, with blank values treated as absent
    pub fn output_path(&self) -> Option<&str> {
        self.output_file
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Check if writing to stdout
    pub fn writing_to_stdout(&self) -> bool {
        self.output_path().is_none()
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> SortResult<()> {
        if self.inline_input().is_none() && self.input_path().is_none() {
            return Err(SortError::MissingInput);
        }
        Ok(())
    }
}
