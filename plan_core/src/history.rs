//! Completed-session history log.
//!
//! This module keeps an append-only CSV log of completed sessions and loads
//! recent records back for display. The log is advisory: plan generation
//! never reads it, so a damaged row is skipped with a warning instead of
//! failing the whole load.

use crate::types::{CompletedSessionRecord, CompletionStatus, WorkoutFocus};
use crate::{Error, Result};
use chrono::{DateTime, Duration, Utc};
use csv::{ReaderBuilder, WriterBuilder};
use std::path::Path;
use uuid::Uuid;

/// CSV row format for the history log
#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct CsvRow {
    id: String,
    date: String,
    focus: WorkoutFocus,
    status: CompletionStatus,
}

impl From<&CompletedSessionRecord> for CsvRow {
    fn from(record: &CompletedSessionRecord) -> Self {
        Self {
            id: record.id.to_string(),
            date: record.date.to_rfc3339(),
            focus: record.focus,
            status: record.status,
        }
    }
}

impl TryFrom<CsvRow> for CompletedSessionRecord {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| Error::Other(format!("Invalid UUID: {}", e)))?;

        let date = DateTime::parse_from_rfc3339(&row.date)
            .map_err(|e| Error::Other(format!("Invalid date: {}", e)))?
            .with_timezone(&Utc);

        Ok(CompletedSessionRecord {
            id,
            date,
            focus: row.focus,
            status: row.status,
        })
    }
}

/// Append one completion record to the log
///
/// Creates the file (with headers) on first use.
pub fn append_record(path: &Path, record: &CompletedSessionRecord) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let write_headers = !path.exists();
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(write_headers)
        .from_writer(file);
    writer.serialize(CsvRow::from(record))?;
    writer.flush()?;

    tracing::debug!("Appended completion record {} to {:?}", record.id, path);
    Ok(())
}

/// Load all completion records from the log
///
/// Malformed rows are skipped with a warning.
pub fn load_records(path: &Path) -> Result<Vec<CompletedSessionRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;

    let mut records = Vec::new();
    for result in reader.deserialize::<CsvRow>() {
        match result {
            Ok(row) => match CompletedSessionRecord::try_from(row) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!("Failed to parse history row: {}", e);
                }
            },
            Err(e) => {
                tracing::warn!("Failed to deserialize history row: {}", e);
            }
        }
    }

    Ok(records)
}

/// Load completion records from the last N days, newest first
pub fn load_recent(path: &Path, now: DateTime<Utc>, days: i64) -> Result<Vec<CompletedSessionRecord>> {
    let cutoff = now - Duration::days(days);
    let mut records: Vec<_> = load_records(path)?
        .into_iter()
        .filter(|r| r.date >= cutoff)
        .collect();

    records.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(focus: WorkoutFocus, days_ago: i64) -> CompletedSessionRecord {
        CompletedSessionRecord {
            id: Uuid::new_v4(),
            date: Utc::now() - Duration::days(days_ago),
            focus,
            status: CompletionStatus::Full,
        }
    }

    #[test]
    fn test_append_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("completions.csv");

        let first = record(WorkoutFocus::Strength, 2);
        let second = record(WorkoutFocus::Metabolic, 1);
        append_record(&path, &first).unwrap();
        append_record(&path, &second).unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, first.id);
        assert_eq!(records[0].focus, WorkoutFocus::Strength);
        assert_eq!(records[1].status, CompletionStatus::Full);
    }

    #[test]
    fn test_load_recent_filters_and_sorts() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("completions.csv");

        append_record(&path, &record(WorkoutFocus::Strength, 10)).unwrap();
        append_record(&path, &record(WorkoutFocus::Hypertrophy, 3)).unwrap();
        append_record(&path, &record(WorkoutFocus::Metabolic, 1)).unwrap();

        let recent = load_recent(&path, Utc::now(), 7).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].focus, WorkoutFocus::Metabolic); // newest first
        assert_eq!(recent[1].focus, WorkoutFocus::Hypertrophy);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nonexistent.csv");

        assert!(load_records(&path).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_row_is_skipped() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("completions.csv");

        append_record(&path, &record(WorkoutFocus::Strength, 1)).unwrap();
        // Corrupt a row by hand
        let mut contents = std::fs::read_to_string(&path).unwrap();
        contents.push_str("not-a-uuid,not-a-date,strength,full\n");
        std::fs::write(&path, contents).unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 1);
    }
}
