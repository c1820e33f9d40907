use pagetext_core::error::PagetextError;
use pagetext_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

use crate::output;
use crate::OptionArgs;

pub fn run(
    input_file: PathBuf,
    option_args: &OptionArgs,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), PagetextError> {
    let options = super::resolve_options(option_args)?;
    let as_json = match output_format {
        "json" => true,
        "text" => false,
        other => {
            return Err(PagetextError::ConfigInvalid(format!(
                "unknown output format '{other}' (expected 'text' or 'json')"
            )))
        }
    };
    let extractor = PdftotextExtractor::new();
    let document = pagetext_core::extract_document(&input_file, &extractor, &options)?;

    let output_str = if as_json {
        serde_json::to_string_pretty(&document)?
    } else {
        output::text::format_document(&document)
    };

    match output_file {
        Some(path) => {
            std::fs::write(&path, &output_str)?;
            eprintln!(
                "Extracted {}, written to {}",
                output::text::format_summary(&document),
                path.display()
            );
        }
        None => {
            println!("{output_str}");
        }
    }

    Ok(())
}
