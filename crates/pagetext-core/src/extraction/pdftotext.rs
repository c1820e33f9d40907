use crate::error::PagetextError;
use crate::extraction::{PageContent, PdfExtractor, WordOptions};
use crate::model::WordBox;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::Write;
use std::path::Path;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Native text comes from `pdftotext -layout`, word boxes from `pdftotext -bbox`.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(
        &self,
        pdf_bytes: &[u8],
        words: &WordOptions,
    ) -> Result<Vec<PageContent>, PagetextError> {
        // Write PDF bytes to a temp file; it is removed when `tmpfile` drops.
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| PagetextError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| PagetextError::Extraction(e.to_string()))?;
        let tmp_path = tmpfile.path().to_path_buf();

        let text = run_pdftotext("-layout", &tmp_path)?;
        let xml = run_pdftotext("-bbox", &tmp_path)?;

        let pages = assemble_pages(&text, &xml, words)?;

        tracing::debug!(pages = pages.len(), "pdftotext extracted pages");
        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

fn run_pdftotext(mode: &str, pdf_path: &Path) -> Result<String, PagetextError> {
    let output = Command::new("pdftotext")
        .arg(mode)
        .arg(pdf_path)
        .arg("-") // output to stdout
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PagetextError::PdftotextNotFound
            } else {
                PagetextError::Extraction(format!("pdftotext {mode} failed: {e}"))
            }
        })?;

    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        return Err(PagetextError::PdftotextFailed { code, stderr });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Pair `-layout` text with `-bbox` words. The page list comes from the bbox
/// output; page i takes the i-th form-feed chunk, or `""` if there is none.
fn assemble_pages(
    text: &str,
    xml: &str,
    options: &WordOptions,
) -> Result<Vec<PageContent>, PagetextError> {
    let word_pages = parse_bbox_xml(xml)?;
    // pdftotext ends every page with a form feed, so the last chunk is empty.
    let native: Vec<&str> = text.split('\x0c').collect();

    Ok(word_pages
        .into_iter()
        .enumerate()
        .map(|(i, raw_words)| PageContent {
            page_number: i + 1,
            native_text: native.get(i).copied().unwrap_or_default().to_string(),
            words: merge_words(raw_words, options),
        })
        .collect())
}

/// Parse `pdftotext -bbox` output into one word list per `<page>` element.
fn parse_bbox_xml(xml: &str) -> Result<Vec<Vec<WordBox>>, PagetextError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut pages: Vec<Vec<WordBox>> = Vec::new();
    let mut current_word: Option<(WordBox, String)> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"page" => pages.push(Vec::new()),
                b"word" => {
                    current_word = word_from_tag(&e).map(|w| (w, String::new()));
                }
                _ => {}
            },
            Ok(Event::Empty(e)) => {
                if e.name().as_ref() == b"page" {
                    pages.push(Vec::new());
                }
            }
            Ok(Event::Text(e)) => {
                if let Some((_, text)) = current_word.as_mut() {
                    match e.unescape() {
                        Ok(t) => text.push_str(&t),
                        Err(_) => text.push_str(&String::from_utf8_lossy(&e)),
                    }
                }
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"word" {
                    if let Some((mut word, text)) = current_word.take() {
                        word.text = text;
                        match pages.last_mut() {
                            Some(page) if !word.text.trim().is_empty() => page.push(word),
                            Some(_) => {}
                            None => tracing::warn!("word outside of <page> ignored"),
                        }
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(PagetextError::Extraction(format!(
                    "invalid pdftotext -bbox output at byte {}: {e}",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
    }

    Ok(pages)
}

fn word_from_tag(tag: &BytesStart) -> Option<WordBox> {
    let mut left = None;
    let mut top = None;
    let mut right = None;
    let mut bottom = None;

    for attr in tag.attributes().flatten() {
        let value = String::from_utf8_lossy(&attr.value);
        let parsed = value.parse::<f64>().ok();
        match attr.key.as_ref() {
            b"xMin" => left = parsed,
            b"yMin" => top = parsed,
            b"xMax" => right = parsed,
            b"yMax" => bottom = parsed,
            _ => {}
        }
    }

    match (left, top, right, bottom) {
        (Some(left), Some(top), Some(right), Some(bottom)) => {
            Some(WordBox::new(String::new(), left, top, right, bottom))
        }
        _ => {
            tracing::warn!("skipping word with missing or invalid coordinates");
            None
        }
    }
}

/// Merge consecutive words that pdftotext split but that sit within the word
/// tolerances of each other on the same line.
fn merge_words(words: Vec<WordBox>, options: &WordOptions) -> Vec<WordBox> {
    let mut merged: Vec<WordBox> = Vec::with_capacity(words.len());

    for word in words {
        if let Some(last) = merged.last_mut() {
            let x_gap = (last.left.max(word.left) - last.right.min(word.right)).max(0.0);
            let y_diff = (word.top - last.top).abs();
            if word.left >= last.left
                && x_gap <= options.x_tolerance
                && y_diff <= options.y_tolerance
            {
                if options.keep_blank_chars && x_gap > 0.0 {
                    last.text.push(' ');
                }
                last.text.push_str(&word.text);
                last.left = last.left.min(word.left);
                last.top = last.top.min(word.top);
                last.right = last.right.max(word.right);
                last.bottom = last.bottom.max(word.bottom);
                continue;
            }
        }
        merged.push(word);
    }

    merged
}
