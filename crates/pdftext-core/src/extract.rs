//! Page-by-page text extraction into an [`ExtractionResult`].

use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::result::{ExtractionResult, TOO_SHORT_MESSAGE};
use crate::pdf::{self, PdfExtractor, PdfProcessor};

/// Drives a [`PdfProcessor`] over a whole document and applies the
/// minimum-length check.
pub struct TextExtractor<P = PdfExtractor> {
    processor: P,
    config: ExtractionConfig,
}

impl TextExtractor<PdfExtractor> {
    /// Create an extractor backed by [`PdfExtractor`].
    pub fn new(config: ExtractionConfig) -> Self {
        Self::with_processor(PdfExtractor::new(), config)
    }
}

impl<P: PdfProcessor> TextExtractor<P> {
    /// Create an extractor over a custom backend.
    pub fn with_processor(processor: P, config: ExtractionConfig) -> Self {
        Self { processor, config }
    }

    /// Extract text from a complete PDF document.
    ///
    /// Every failure (unparseable bytes, a page that cannot be read, too
    /// little text) is reported in the returned record rather than as an
    /// error.
    pub fn extract(&mut self, data: &[u8]) -> ExtractionResult {
        let (text, pages) = match self.collect_text(data) {
            Ok(collected) => collected,
            Err(e) => {
                info!("PDF extraction failed: {}", e);
                return ExtractionResult::failure(e.to_string());
            }
        };

        let trimmed = text.trim();
        let char_count = trimmed.chars().count();
        debug!("Extracted {} chars from {} pages", char_count, pages);

        if char_count < self.config.min_text_length {
            info!(
                "Extracted text below minimum length ({} < {})",
                char_count, self.config.min_text_length
            );
            return ExtractionResult::failure(TOO_SHORT_MESSAGE);
        }

        ExtractionResult::success(trimmed.to_string(), pages)
    }

    fn collect_text(&mut self, data: &[u8]) -> pdf::Result<(String, usize)> {
        self.processor.load(data)?;

        let page_count = self.processor.page_count();
        let mut text = String::new();
        for index in 0..page_count {
            text.push_str(&self.processor.extract_page_text(index)?);
            text.push_str(&self.config.page_separator);
        }

        Ok((text, page_count))
    }
}

/// Extract text from PDF bytes with the default backend.
pub fn extract_text(data: &[u8], config: &ExtractionConfig) -> ExtractionResult {
    TextExtractor::new(config.clone()).extract(data)
}
