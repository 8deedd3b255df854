use crate::models::SaveOutcome;
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;
use tracing::{info, warn};

/// Default output file for a keyword
pub fn default_filename(keyword: &str) -> String {
    format!("{}_results.json", keyword)
}

/// Number of entries in the payload's `accommodations` array, 0 if absent
fn accommodation_count(results: &Value) -> usize {
    results
        .get("accommodations")
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}

async fn write_json(path: &Path, results: &Value) -> Result<()> {
    let json = serde_json::to_string_pretty(results).context("Failed to serialize results")?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Write `results` as pretty JSON. Failures are reported in the outcome,
/// never returned as errors.
pub async fn save_search_results(
    keyword: &str,
    results: &Value,
    filename: Option<&str>,
) -> SaveOutcome {
    let filename = match filename {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => default_filename(keyword),
    };

    match write_json(Path::new(&filename), results).await {
        Ok(()) => {
            let count = accommodation_count(results);
            info!("💾 Saved {} accommodations to {}", count, filename);
            SaveOutcome::saved(filename, count)
        }
        Err(e) => {
            warn!(filename = %filename, error = %e, "Failed to save search results");
            SaveOutcome::failed(format!("{:#}", e))
        }
    }
}
