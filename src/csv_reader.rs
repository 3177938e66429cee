use crate::data::Dataset;
use anyhow::{Context, Result};
use std::io::{self, Read};

/// Read CSV with a header row from stdin into a Dataset.
pub fn read_csv_from_stdin() -> Result<Dataset> {
    read_csv(io::stdin().lock())
}

/// Read CSV with a header row from any reader into a Dataset.
/// A header-only input yields a dataset with zero rows; grouping and
/// rendering both accept that.
pub fn read_csv<R: Read>(reader: R) -> Result<Dataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .context("Failed to read CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (idx, record) in csv_reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to read CSV row {}", idx + 1))?;
        rows.push(record.iter().map(|v| v.trim().to_string()).collect());
    }

    Ok(Dataset::new(headers, rows))
}
