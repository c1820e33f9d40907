pub mod extract;
pub mod lines;
pub mod words;

use pagetext_core::config::{self, ExtractOptions};
use pagetext_core::error::PagetextError;

use crate::OptionArgs;

/// Load options from `--config` (or defaults) and apply flag overrides.
pub fn resolve_options(args: &OptionArgs) -> Result<ExtractOptions, PagetextError> {
    let mut options = match &args.config {
        Some(path) => config::load_options(path)?,
        None => ExtractOptions::default(),
    };

    if let Some(threshold) = args.threshold {
        options.line_threshold = threshold;
    }
    if let Some(tolerance) = args.word_tolerance {
        options.word_tolerance = tolerance;
    }

    config::validate_options(&options)?;
    Ok(options)
}
