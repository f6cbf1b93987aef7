//! Export of the aligned test set as a tabular artifact

use crate::align::AlignedTestSet;
use crate::error::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// One exported row; both fields are empty for a validation-dropped slot
#[derive(Debug, Clone, Serialize)]
struct ExportRow {
    date: Option<NaiveDate>,
    predicted_value: Option<f64>,
}

fn export_rows(aligned: &AlignedTestSet) -> Vec<ExportRow> {
    aligned
        .iter()
        .map(|slot| match slot {
            Some(record) => ExportRow {
                date: Some(record.date),
                predicted_value: record.predicted_value,
            },
            None => ExportRow {
                date: None,
                predicted_value: None,
            },
        })
        .collect()
}

/// Write the aligned set as a headered CSV table (`date,predicted_value`),
/// one row per original input row, blank fields for absent values.
pub fn aligned_to_csv<W: Write>(aligned: &AlignedTestSet, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in export_rows(aligned) {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the aligned set as a CSV file
pub fn aligned_to_csv_file<P: AsRef<Path>>(aligned: &AlignedTestSet, path: P) -> Result<()> {
    let file = std::fs::File::create(path)?;
    aligned_to_csv(aligned, file)
}

/// Serialize the aligned set as a JSON array of
/// `{date, predicted_value}` objects, `null` for absent values.
pub fn aligned_to_json(aligned: &AlignedTestSet) -> Result<String> {
    Ok(serde_json::to_string_pretty(&export_rows(aligned))?)
}
