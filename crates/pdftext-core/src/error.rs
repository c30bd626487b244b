//! Error types for the pdftext-core library.

use thiserror::Error;

/// Main error type for the pdftext library.
#[derive(Error, Debug)]
pub enum PdfTextError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF data.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The text extraction library panicked on the document.
    #[error("PDF text extraction aborted: {0}")]
    Panicked(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// No document has been loaded yet.
    #[error("no document loaded")]
    NotLoaded,

    /// Invalid page index requested.
    #[error("invalid page index: {0}")]
    InvalidPage(usize),
}

/// Result type for the pdftext library.
pub type Result<T> = std::result::Result<T, PdfTextError>;
