//! Market summary generation
//!
//! Condenses a harvested collection into the plain-text block the downstream
//! gap-analysis step consumes: title plus a truncated description preview
//! for the first N records.

use crate::records::JobRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// How many characters of each description the summary keeps
pub const DESCRIPTION_PREVIEW_CHARS: usize = 500;

/// Builds the market-summary text block from harvested records
///
/// # Arguments
///
/// * `records` - The harvested collection
/// * `limit` - How many records to include, from the front
///
/// # Returns
///
/// A text block of `Job Title:` / `Description:` paragraphs, or a fixed
/// placeholder when the collection is empty.
pub fn market_summary(records: &[JobRecord], limit: usize) -> String {
    if records.is_empty() {
        return "No job data available.".to_string();
    }

    let mut combined = String::new();
    for record in records.iter().take(limit) {
        combined.push_str(&format!("Job Title: {}\n", record.title));
        combined.push_str(&format!(
            "Description: {}...\n\n",
            truncate_chars(&record.description, DESCRIPTION_PREVIEW_CHARS)
        ));
    }

    combined
}

/// Writes the market summary for a collection to a file
///
/// # Arguments
///
/// * `path` - Destination of the summary text
/// * `records` - The harvested collection
/// * `limit` - How many records to include
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the summary
/// * `Err(HarvestError)` - IO failure
pub fn write_summary(path: &Path, records: &[JobRecord], limit: usize) -> crate::Result<()> {
    let summary = market_summary(records, limit);

    let mut file = File::create(path)?;
    file.write_all(summary.as_bytes())?;

    Ok(())
}

/// Truncates on a char boundary; descriptions are routinely multi-byte
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
