//! Core library for PDF text extraction.
//!
//! This crate provides:
//! - PDF loading and per-page text extraction (lopdf + pdf-extract)
//! - Page concatenation with a minimum-length check
//! - The JSON result record reported to callers
//! - Configuration for the extraction policy

pub mod error;
pub mod extract;
pub mod models;
pub mod pdf;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use error::{PdfError, PdfTextError, Result};
pub use extract::{TextExtractor, extract_text};
pub use models::config::{ExtractionConfig, PdfTextConfig};
pub use models::result::ExtractionResult;
pub use pdf::{PdfExtractor, PdfProcessor};
