//! Persisted JSON collection
//!
//! Each harvest run serializes its complete result as a pretty-printed JSON
//! array, fully replacing any prior file. There is no merge or append path;
//! downstream consumers always see one coherent run.

use crate::records::JobRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the full collection, overwriting any existing file
///
/// # Arguments
///
/// * `path` - Destination of the JSON collection
/// * `records` - The records to persist
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the collection
/// * `Err(HarvestError)` - Serialization or IO failure
pub fn write_collection(path: &Path, records: &[JobRecord]) -> crate::Result<()> {
    let json = serde_json::to_string_pretty(records)?;

    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;

    Ok(())
}

/// Loads a previously persisted collection
///
/// # Arguments
///
/// * `path` - Path of the JSON collection
///
/// # Returns
///
/// * `Ok(Vec<JobRecord>)` - The deserialized records
/// * `Err(HarvestError)` - IO or deserialization failure
pub fn load_collection(path: &Path) -> crate::Result<Vec<JobRecord>> {
    let content = std::fs::read_to_string(path)?;
    let records = serde_json::from_str(&content)?;
    Ok(records)
}
