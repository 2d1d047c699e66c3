use anyhow::{Context, Result};
use std::path::Path;

use crate::pdf;

/// Joins per-page texts into the final output buffer.
///
/// Every page contributes its text plus a terminating newline, including
/// the last page. Page order is preserved exactly; nothing is trimmed,
/// filtered, or deduplicated, so a page with no extractable text shows up
/// as a blank line at its position.
pub fn join_pages(pages: &[String]) -> String {
    let mut buffer = String::new();
    for page in pages {
        buffer.push_str(page);
        buffer.push('\n');
    }
    buffer
}

/// Extracts a PDF into a plain-text file.
///
/// Pipeline: Extract pages → Join → Write output → Report.
pub fn run(input: &str, output: &Path) -> Result<()> {
    println!("  Extracting text from: {}", input);
    let pages = pdf::extract_pages(input)?;
    println!("  Extracted {} pages.", pages.len());

    let text = join_pages(&pages);

    std::fs::write(output, text.as_bytes())
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;

    println!("PDF text extracted to {}", output.display());

    Ok(())
}
