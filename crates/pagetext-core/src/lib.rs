pub mod config;
pub mod error;
pub mod extraction;
pub mod model;
pub mod reconstruct;

use config::ExtractOptions;
use error::PagetextError;
use extraction::{PageContent, PdfExtractor};
use model::{DocumentText, PageResult, PageSection};
use std::path::Path;

/// Message returned by [`extract_text`] when the document path does not resolve.
pub const FILE_NOT_FOUND_MESSAGE: &str =
    "Error: The file was not found. Please provide the correct file path.";

/// Prefix of the message returned by [`extract_text`] for any other failure.
pub const UNEXPECTED_ISSUE_PREFIX: &str = "Error: An unexpected issue occurred: ";

/// Main API entry point: extract the text of the PDF at `path`.
///
/// Each page uses its native text when that has any non-whitespace content and
/// falls back to geometric line reconstruction otherwise. The first failure
/// aborts the whole document; no partial result is returned.
pub fn extract_document(
    path: &Path,
    extractor: &dyn PdfExtractor,
    options: &ExtractOptions,
) -> Result<DocumentText, PagetextError> {
    let pdf_bytes = read_document(path)?;

    tracing::info!(
        path = %path.display(),
        backend = extractor.backend_name(),
        "extracting document"
    );
    extract_pdf(&pdf_bytes, extractor, options)
}

/// Read a document into memory. A path that does not resolve is reported as
/// [`PagetextError::DocumentNotFound`].
pub fn read_document(path: &Path) -> Result<Vec<u8>, PagetextError> {
    std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PagetextError::DocumentNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PagetextError::Io(e)
        }
    })
}

/// Extract the text of an in-memory PDF.
pub fn extract_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    options: &ExtractOptions,
) -> Result<DocumentText, PagetextError> {
    config::validate_options(options)?;
    let pages = extractor.extract_pages(pdf_bytes, &options.word_options())?;
    Ok(extract_pages(&pages, options))
}

/// Resolve already-extracted pages, strictly in the order given.
pub fn extract_pages(pages: &[PageContent], options: &ExtractOptions) -> DocumentText {
    let sections: Vec<PageSection> = pages
        .iter()
        .enumerate()
        .map(|(i, page)| PageSection {
            page_number: i + 1,
            result: resolve_page(page, options),
        })
        .collect();

    let document = DocumentText { pages: sections };
    let stats = document.stats();
    tracing::info!(
        native = stats.native_pages,
        reconstructed = stats.reconstructed_pages,
        empty = stats.empty_pages,
        "document extracted"
    );
    document
}

fn resolve_page(page: &PageContent, options: &ExtractOptions) -> PageResult {
    let native = page.native_text.trim();
    if !native.is_empty() {
        tracing::debug!(page = page.page_number, "using native text");
        return PageResult::Native(native.to_string());
    }

    let groups = reconstruct::reconstruct_lines(&page.words, options.line_threshold);
    tracing::debug!(
        page = page.page_number,
        words = page.words.len(),
        lines = groups.len(),
        "native text empty, reconstructed from word boxes"
    );
    if groups.is_empty() {
        PageResult::NoText
    } else {
        PageResult::Reconstructed(groups)
    }
}

/// Render an extraction outcome as a single string, the way the tool reports
/// it to users: the document text on success, otherwise a fixed error line.
pub fn describe_outcome(outcome: &Result<DocumentText, PagetextError>) -> String {
    match outcome {
        Ok(document) => document.render(),
        Err(e) if e.is_not_found() => FILE_NOT_FOUND_MESSAGE.to_string(),
        Err(e) => format!("{UNEXPECTED_ISSUE_PREFIX}{e}"),
    }
}

/// Extract the document at `path` and always return a string.
///
/// Failures are folded into the returned text; see [`describe_outcome`].
pub fn extract_text(path: &Path, extractor: &dyn PdfExtractor, options: &ExtractOptions) -> String {
    let outcome = extract_document(path, extractor, options);
    if let Err(ref e) = outcome {
        tracing::warn!("extraction failed: {e}");
    }
    describe_outcome(&outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::WordBox;

    fn page(number: usize, native: &str, words: Vec<WordBox>) -> PageContent {
        PageContent {
            page_number: number,
            native_text: native.to_string(),
            words,
        }
    }

    #[test]
    fn test_native_text_is_trimmed() {
        let doc = extract_pages(
            &[page(1, "\n  Hello there  \n\n", vec![])],
            &ExtractOptions::default(),
        );
        assert_eq!(doc.pages[0].result, PageResult::Native("Hello there".into()));
    }

    #[test]
    fn test_native_text_wins_over_words() {
        let words = vec![WordBox::new("ignored", 0.0, 0.0, 10.0, 10.0)];
        let doc = extract_pages(&[page(1, "present", words)], &ExtractOptions::default());
        assert_eq!(doc.pages[0].result, PageResult::Native("present".into()));
    }

    #[test]
    fn test_blank_native_text_falls_back() {
        let words = vec![WordBox::new("scanned", 0.0, 0.0, 30.0, 10.0)];
        let doc = extract_pages(&[page(1, "   ", words)], &ExtractOptions::default());
        match &doc.pages[0].result {
            PageResult::Reconstructed(groups) => {
                assert_eq!(groups.len(), 1);
                assert_eq!(groups[0].text(), "scanned");
            }
            other => panic!("expected reconstructed page, got {other:?}"),
        }
    }

    #[test]
    fn test_no_words_and_no_text() {
        let doc = extract_pages(&[page(1, "\n\x0c", vec![])], &ExtractOptions::default());
        assert_eq!(doc.pages[0].result, PageResult::NoText);
    }

    #[test]
    fn test_page_numbers_follow_input_order() {
        let pages = vec![page(7, "a", vec![]), page(3, "", vec![]), page(9, "c", vec![])];
        let doc = extract_pages(&pages, &ExtractOptions::default());
        let numbers: Vec<usize> = doc.pages.iter().map(|p| p.page_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_read_document() {
        let err = read_document(Path::new("/definitely/not/here.pdf")).unwrap_err();
        assert!(matches!(err, PagetextError::DocumentNotFound { .. }));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();
        assert_eq!(read_document(&path).unwrap(), b"%PDF-1.4");

        // A directory exists but cannot be read as a file.
        let err = read_document(dir.path()).unwrap_err();
        assert!(!matches!(err, PagetextError::DocumentNotFound { .. }));
    }

    #[test]
    fn test_describe_outcome_errors() {
        let not_found: Result<DocumentText, PagetextError> = Err(PagetextError::DocumentNotFound {
            path: "missing.pdf".into(),
        });
        assert_eq!(describe_outcome(&not_found), FILE_NOT_FOUND_MESSAGE);

        let failed: Result<DocumentText, PagetextError> =
            Err(PagetextError::Extraction("bad xref".into()));
        assert_eq!(
            describe_outcome(&failed),
            "Error: An unexpected issue occurred: PDF extraction failed: bad xref"
        );
    }
}
