use pagetext_core::model::{DocumentText, PageResult};

pub fn format_document(document: &DocumentText) -> String {
    document.render()
}

/// One-line summary of how each page was resolved, e.g. for `--out` runs.
pub fn format_summary(document: &DocumentText) -> String {
    let stats = document.stats();
    let mut summary = format!(
        "{} page(s): {} native, {} reconstructed, {} empty",
        document.pages.len(),
        stats.native_pages,
        stats.reconstructed_pages,
        stats.empty_pages
    );

    let line_count: usize = document
        .pages
        .iter()
        .map(|p| match &p.result {
            PageResult::Reconstructed(groups) => groups.len(),
            _ => 0,
        })
        .sum();
    if line_count > 0 {
        summary.push_str(&format!(" ({line_count} line(s) rebuilt from word boxes)"));
    }

    summary
}
