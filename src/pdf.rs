use anyhow::{Context, Result};
use std::path::Path;

/// Extracts the text content of every page in the PDF at the given path.
///
/// Returns one `String` per page, in document order. A page with no
/// extractable text (e.g. a pure-image page) yields an empty string at
/// its position; a zero-page document yields an empty `Vec`.
pub fn extract_pages(path: &str) -> Result<Vec<String>> {
    let file_path = Path::new(path);

    if !file_path.exists() {
        anyhow::bail!("File not found: {}", path);
    }

    let bytes = std::fs::read(file_path)
        .with_context(|| format!("Failed to read file: {}", path))?;

    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
        .with_context(|| format!("Failed to extract text from PDF: {}", path))?;

    Ok(pages)
}
