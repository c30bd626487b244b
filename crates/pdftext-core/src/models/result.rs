//! The extraction result record written once per invocation.

use serde::Serialize;

/// Error text when no bytes were supplied at all.
pub const NO_DATA_MESSAGE: &str = "No PDF data received";

/// Error text when the document yielded less text than the configured minimum.
pub const TOO_SHORT_MESSAGE: &str = "Extracted text is too short or empty";

/// Outcome of one extraction.
///
/// Serializes as `{"success", "text", "error", "pages", "char_count"}`.
/// `error` is always present (`null` on success); `pages` and `char_count`
/// only appear on success. Failures always carry an empty `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    success: bool,
    text: String,
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pages: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    char_count: Option<usize>,
}

impl ExtractionResult {
    /// Successful extraction of `text` from a document with `pages` pages.
    pub fn success(text: String, pages: usize) -> Self {
        let char_count = text.chars().count();
        Self {
            success: true,
            text,
            error: None,
            pages: Some(pages),
            char_count: Some(char_count),
        }
    }

    /// Failed extraction with a human-readable reason.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            text: String::new(),
            error: Some(message.into()),
            pages: None,
            char_count: None,
        }
    }

    /// Failure for an empty input stream or file.
    pub fn no_data() -> Self {
        Self::failure(NO_DATA_MESSAGE)
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn pages(&self) -> Option<usize> {
        self.pages
    }

    pub fn char_count(&self) -> Option<usize> {
        self.char_count
    }

    /// Serialize as a single-line JSON object.
    ///
    /// The output is compact (no space after `:` or `,`) and non-ASCII
    /// characters are written as raw UTF-8 rather than `\uXXXX` escapes.
    /// It parses to the same object as space-separated, ASCII-escaped
    /// JSON but is not byte-identical to it.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
