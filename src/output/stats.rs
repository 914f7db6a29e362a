//! Statistics over a harvested collection
//!
//! This module provides functionality for summarizing a run: how many
//! records each keyword produced and how complete their fields are.

use crate::records::{JobRecord, NO_DESCRIPTION, UNKNOWN_FIELD};
use std::collections::{HashMap, HashSet};

/// Harvest statistics summary
#[derive(Debug, Clone)]
pub struct HarvestStatistics {
    /// Total number of persisted records
    pub total_records: u64,

    /// Record count per source keyword
    pub records_by_keyword: HashMap<String, u64>,

    /// Number of distinct companies seen
    pub unique_companies: u64,

    /// Records whose title fell back to the unknown sentinel
    pub unknown_titles: u64,

    /// Records whose description fell back to the placeholder
    pub missing_descriptions: u64,

    /// Records with both a real title and a real description
    pub complete_records: u64,
}

/// Computes statistics from a harvested collection
///
/// # Arguments
///
/// * `records` - The records to summarize
pub fn compute_statistics(records: &[JobRecord]) -> HarvestStatistics {
    let mut records_by_keyword: HashMap<String, u64> = HashMap::new();
    let mut companies: HashSet<&str> = HashSet::new();
    let mut unknown_titles = 0;
    let mut missing_descriptions = 0;
    let mut complete_records = 0;

    for record in records {
        *records_by_keyword.entry(record.keyword.clone()).or_insert(0) += 1;

        if record.company != UNKNOWN_FIELD {
            companies.insert(record.company.as_str());
        }

        if record.title == UNKNOWN_FIELD {
            unknown_titles += 1;
        }

        if record.description == NO_DESCRIPTION {
            missing_descriptions += 1;
        }

        if record.title != UNKNOWN_FIELD && record.description != NO_DESCRIPTION {
            complete_records += 1;
        }
    }

    HarvestStatistics {
        total_records: records.len() as u64,
        records_by_keyword,
        unique_companies: companies.len() as u64,
        unknown_titles,
        missing_descriptions,
        complete_records,
    }
}

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn print_statistics(stats: &HarvestStatistics) {
    println!("=== Harvest Statistics ===\n");

    println!("Overview:");
    println!("  Total records: {}", stats.total_records);
    println!("  Unique companies: {}", stats.unique_companies);
    println!();

    println!("Records by Keyword:");
    // Sort keywords by count (descending)
    let mut keyword_counts: Vec<_> = stats.records_by_keyword.iter().collect();
    keyword_counts.sort_by(|a, b| b.1.cmp(a.1));

    for (keyword, count) in keyword_counts {
        let percentage = if stats.total_records > 0 {
            (*count as f64 / stats.total_records as f64) * 100.0
        } else {
            0.0
        };
        println!("  {}: {} ({:.1}%)", keyword, count, percentage);
    }
    println!();

    if stats.unknown_titles > 0 || stats.missing_descriptions > 0 {
        println!("Extraction Gaps:");
        println!("  Unknown titles: {}", stats.unknown_titles);
        println!("  Missing descriptions: {}", stats.missing_descriptions);
        println!();
    }

    let completeness = if stats.total_records > 0 {
        (stats.complete_records as f64 / stats.total_records as f64) * 100.0
    } else {
        0.0
    };

    println!(
        "Completeness: {:.1}% ({} / {} records with full fields)",
        completeness, stats.complete_records, stats.total_records
    );
}
