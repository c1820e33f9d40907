use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PagetextError {
    #[error("document not found: {}", path.display())]
    DocumentNotFound { path: PathBuf },

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to load options from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("invalid options: {0}")]
    ConfigInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PagetextError {
    /// True when the error means the input document could not be located.
    pub fn is_not_found(&self) -> bool {
        match self {
            PagetextError::DocumentNotFound { .. } => true,
            PagetextError::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
