use crate::error::PagetextError;
use crate::extraction::WordOptions;
use crate::reconstruct::DEFAULT_LINE_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default tolerance, in page units, for merging glyphs into one word.
pub const DEFAULT_WORD_TOLERANCE: f64 = 2.0;

/// Tunables for a document extraction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Maximum center distance for two words to be chained into a line.
    pub line_threshold: f64,
    /// Horizontal and vertical tolerance handed to the word extractor.
    pub word_tolerance: f64,
    /// Keep blank characters inside words when merging.
    pub keep_blank_chars: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            line_threshold: DEFAULT_LINE_THRESHOLD,
            word_tolerance: DEFAULT_WORD_TOLERANCE,
            keep_blank_chars: true,
        }
    }
}

impl ExtractOptions {
    pub fn word_options(&self) -> WordOptions {
        WordOptions {
            x_tolerance: self.word_tolerance,
            y_tolerance: self.word_tolerance,
            keep_blank_chars: self.keep_blank_chars,
        }
    }
}

/// Load extraction options from a JSON file. Missing fields take defaults.
pub fn load_options(path: &Path) -> Result<ExtractOptions, PagetextError> {
    let content = std::fs::read_to_string(path).map_err(|e| PagetextError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let options: ExtractOptions =
        serde_json::from_str(&content).map_err(|e| PagetextError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_options(&options)?;
    Ok(options)
}

/// Parse extraction options from a JSON string (no file path context).
pub fn parse_options_str(json: &str) -> Result<ExtractOptions, PagetextError> {
    let options: ExtractOptions = serde_json::from_str(json)?;
    validate_options(&options)?;
    Ok(options)
}

pub fn validate_options(options: &ExtractOptions) -> Result<(), PagetextError> {
    if !options.line_threshold.is_finite() || options.line_threshold <= 0.0 {
        return Err(PagetextError::ConfigInvalid(format!(
            "line_threshold must be a positive number, got {}",
            options.line_threshold
        )));
    }

    if !options.word_tolerance.is_finite() || options.word_tolerance < 0.0 {
        return Err(PagetextError::ConfigInvalid(format!(
            "word_tolerance must be zero or positive, got {}",
            options.word_tolerance
        )));
    }

    Ok(())
}
