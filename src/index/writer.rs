use crate::index::reader::SearchIndex;
use crate::index::types::IndexEntry;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the index as compact JSON with sorted keys.
///
/// Sorted keys keep the artifact byte-identical across builds of the same
/// text. Returns the size of the written file.
pub fn write_index(index: &SearchIndex, path: &Path) -> Result<u64> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let sorted: BTreeMap<&str, &[IndexEntry]> = index.tokens().collect();

    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &sorted).context("Failed to serialize index")?;
    writer.flush()?;

    Ok(fs::metadata(path)?.len())
}
