use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker emitted for a page where neither the text layer nor the word boxes
/// produced anything.
pub const NO_TEXT_MARKER: &str = "[No text found]";

/// One recognized word and its bounding box in page coordinates.
///
/// `top`/`bottom` grow downward, `left`/`right` grow rightward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordBox {
    pub text: String,
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl WordBox {
    pub fn new(text: impl Into<String>, left: f64, top: f64, right: f64, bottom: f64) -> Self {
        WordBox {
            text: text.into(),
            left,
            top,
            right,
            bottom,
        }
    }

    /// Center of the box as `(x, y)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}

/// Words judged to form one visual line, ordered left to right.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineGroup {
    pub words: Vec<WordBox>,
}

impl LineGroup {
    /// Words joined with single spaces, trimmed.
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Outcome of extracting one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum PageResult {
    /// Trimmed, non-empty text from the document's own text layer.
    Native(String),
    /// Lines rebuilt from word geometry.
    Reconstructed(Vec<LineGroup>),
    NoText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSection {
    /// 1-based page index.
    pub page_number: usize,
    pub result: PageResult,
}

impl PageSection {
    fn write_to(&self, out: &mut String) {
        out.push_str(&format!("\n--- Page {} ---\n", self.page_number));
        match &self.result {
            PageResult::Native(text) => {
                out.push_str(text);
                out.push('\n');
            }
            PageResult::Reconstructed(groups) => {
                for group in groups {
                    let line = group.text();
                    if !line.is_empty() {
                        out.push_str(&line);
                        out.push('\n');
                    }
                }
            }
            PageResult::NoText => {
                out.push_str(NO_TEXT_MARKER);
                out.push('\n');
            }
        }
    }
}

/// Per-document tally of how each page was resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    pub native_pages: usize,
    pub reconstructed_pages: usize,
    pub empty_pages: usize,
}

/// Whole-document result, one section per page in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentText {
    pub pages: Vec<PageSection>,
}

impl DocumentText {
    /// Render all page sections with their headers, trimmed once at the end.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for page in &self.pages {
            page.write_to(&mut out);
        }
        out.trim().to_string()
    }

    pub fn stats(&self) -> ExtractionStats {
        let mut stats = ExtractionStats::default();
        for page in &self.pages {
            match page.result {
                PageResult::Native(_) => stats.native_pages += 1,
                PageResult::Reconstructed(_) => stats.reconstructed_pages += 1,
                PageResult::NoText => stats.empty_pages += 1,
            }
        }
        stats
    }
}

impl fmt::Display for DocumentText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
