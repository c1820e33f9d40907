pub mod pdftotext;

use crate::error::PagetextError;
use crate::model::WordBox;
use serde::{Deserialize, Serialize};

/// How the backend should assemble glyphs into words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordOptions {
    /// Maximum horizontal gap between pieces of one word.
    pub x_tolerance: f64,
    /// Maximum difference between the top edges of pieces of one word.
    pub y_tolerance: f64,
    /// Keep the blank between merged pieces instead of dropping it.
    pub keep_blank_chars: bool,
}

impl Default for WordOptions {
    fn default() -> Self {
        WordOptions {
            x_tolerance: 2.0,
            y_tolerance: 2.0,
            keep_blank_chars: true,
        }
    }
}

/// Content extracted from a single page of a PDF.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageContent {
    pub page_number: usize,
    /// Text from the document's own text layer, whitespace preserved. May be
    /// empty or blank.
    pub native_text: String,
    pub words: Vec<WordBox>,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page
    /// in document order.
    fn extract_pages(
        &self,
        pdf_bytes: &[u8],
        words: &WordOptions,
    ) -> Result<Vec<PageContent>, PagetextError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
