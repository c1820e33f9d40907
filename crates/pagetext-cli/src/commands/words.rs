use pagetext_core::error::PagetextError;
use pagetext_core::extraction::pdftotext::PdftotextExtractor;
use pagetext_core::extraction::PdfExtractor;
use std::path::PathBuf;

use crate::output;
use crate::OptionArgs;

pub fn run(input_file: PathBuf, option_args: &OptionArgs) -> Result<(), PagetextError> {
    let options = super::resolve_options(option_args)?;
    let pdf_bytes = pagetext_core::read_document(&input_file)?;

    let extractor = PdftotextExtractor::new();
    let pages = extractor.extract_pages(&pdf_bytes, &options.word_options())?;
    output::json::print(&pages)
}
