//! Configuration structures for text extraction.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PdfTextError, Result};

/// Text shorter than this (after trimming) is treated as "no usable text".
/// Arbitrary policy value, kept for compatibility with existing callers.
pub const DEFAULT_MIN_TEXT_LENGTH: usize = 10;

/// Main configuration for pdftext.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfTextConfig {
    /// Text extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Text extraction configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Minimum number of characters the trimmed text must have.
    pub min_text_length: usize,

    /// Appended after each page's text.
    pub page_separator: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_text_length: DEFAULT_MIN_TEXT_LENGTH,
            page_separator: "\n".to_string(),
        }
    }
}

impl PdfTextConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| PdfTextError::Config(format!("{}: {}", path.display(), e)))
    }
}
