use pagetext_core::error::PagetextError;
use pagetext_core::model::WordBox;
use pagetext_core::reconstruct::reconstruct_lines;
use std::path::PathBuf;

use crate::OptionArgs;

pub fn run(words_file: PathBuf, option_args: &OptionArgs) -> Result<(), PagetextError> {
    let options = super::resolve_options(option_args)?;
    let json = std::fs::read(&words_file)?;
    let words: Vec<WordBox> = serde_json::from_slice(&json)?;

    let groups = reconstruct_lines(&words, options.line_threshold);
    tracing::debug!(words = words.len(), lines = groups.len(), "rebuilt lines");

    for group in &groups {
        let line = group.text();
        if !line.is_empty() {
            println!("{line}");
        }
    }

    Ok(())
}
