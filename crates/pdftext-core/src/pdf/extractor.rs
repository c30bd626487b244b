//! PDF text extraction using lopdf and pdf-extract.

use std::any::Any;
use std::borrow::Cow;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Mutex, PoisonError};

use gag::Gag;
use lopdf::Document;
use pdf_extract::PlainTextOutput;
use tracing::{debug, trace, warn};

use super::{PdfProcessor, Result};
use crate::error::PdfError;

/// Serializes the process-wide panic hook swap and stdout redirection.
static GUARD_LOCK: Mutex<()> = Mutex::new(());

/// PDF text extractor.
///
/// `lopdf` opens the document, handles empty-password encryption and walks
/// the page tree; `pdf-extract` renders each page's content stream to text.
pub struct PdfExtractor {
    document: Option<Document>,
    text_document: Option<pdf_extract::Document>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            text_document: None,
        }
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Owner-password-only files open with an empty user password.
        let plain_data = if doc.is_encrypted() {
            if let Err(e) = doc.decrypt("") {
                debug!("Empty-password decryption failed: {}", e);
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
            Cow::Owned(decrypted_data)
        } else {
            Cow::Borrowed(data)
        };

        let text_document = run_guarded(|| pdf_extract::Document::load_mem(&plain_data))?
            .map_err(|e| PdfError::Parse(e.to_string()))?;

        debug!("Loaded PDF with {} pages", doc.get_pages().len());
        self.document = Some(doc);
        self.text_document = Some(text_document);
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len())
            .unwrap_or(0)
    }

    fn extract_page_text(&self, index: usize) -> Result<String> {
        let doc = self.text_document.as_ref().ok_or(PdfError::NotLoaded)?;
        if index >= self.page_count() {
            return Err(PdfError::InvalidPage(index));
        }
        let page_num = u32::try_from(index + 1).map_err(|_| PdfError::InvalidPage(index))?;

        let mut text = String::new();
        run_guarded(|| {
            let mut output = PlainTextOutput::new(&mut text);
            pdf_extract::output_doc_page(doc, &mut output, page_num)
        })?
        .map_err(|e| PdfError::TextExtraction(e.to_string()))?;

        trace!("Page {}: {} chars", index, text.len());
        Ok(text)
    }
}

/// Run a pdf-extract call with stdout silenced and panics turned into errors.
///
/// pdf-extract prints diagnostics with `println!`, and stdout belongs to the
/// caller's JSON record.
fn run_guarded<T, F: FnOnce() -> T>(f: F) -> Result<T> {
    let _lock = GUARD_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let silenced = Gag::stdout().ok();
    if silenced.is_none() {
        debug!("Could not redirect stdout around pdf-extract");
    }

    let previous_hook = panic::take_hook();
    panic::set_hook(Box::new(|info| {
        warn!("pdf-extract panicked: {}", info);
    }));
    let outcome = panic::catch_unwind(AssertUnwindSafe(f));
    panic::set_hook(previous_hook);

    // Anything still buffered must land in the redirect, not after it.
    let _ = io::stdout().flush();
    drop(silenced);

    outcome.map_err(|payload| PdfError::Panicked(panic_message(payload.as_ref())))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
