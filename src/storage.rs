//! Loading participants from JSON/CSV and saving draw results as JSON.

use crate::models::{DrawResult, Participant};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use uuid::Uuid;

/// Errors from reading or writing draw files.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
    /// File extension is neither `.json` nor `.csv`.
    UnsupportedFormat(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "I/O error: {}", e),
            StorageError::Json(e) => write!(f, "Invalid JSON: {}", e),
            StorageError::Csv(e) => write!(f, "Invalid CSV: {}", e),
            StorageError::UnsupportedFormat(path) => {
                write!(f, "Unsupported participant file: {} (expected .json or .csv)", path)
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Json(e) => Some(e),
            StorageError::Csv(e) => Some(e),
            StorageError::UnsupportedFormat(_) => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Json(e)
    }
}

impl From<csv::Error> for StorageError {
    fn from(e: csv::Error) -> Self {
        StorageError::Csv(e)
    }
}

/// Saved file layout: the draw plus when and under which id it was made.
#[derive(Serialize)]
pub struct SavedDraw<'a> {
    pub draw_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub matches: &'a DrawResult,
}

/// Read a JSON array of participants.
pub fn load_participants_json(path: impl AsRef<Path>) -> Result<Vec<Participant>, StorageError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Read participants from CSV with header `name,country,association,pot`.
/// The `country` column may be left empty.
pub fn load_participants_csv(path: impl AsRef<Path>) -> Result<Vec<Participant>, StorageError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    let mut participants = Vec::new();
    for row in reader.deserialize::<Participant>() {
        participants.push(row?);
    }
    Ok(participants)
}

/// Pick the loader from the file extension.
pub fn load_participants(path: impl AsRef<Path>) -> Result<Vec<Participant>, StorageError> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let participants = match ext.as_deref() {
        Some("json") => load_participants_json(path)?,
        Some("csv") => load_participants_csv(path)?,
        _ => return Err(StorageError::UnsupportedFormat(path.display().to_string())),
    };
    log::info!("Loaded {} participants from {}", participants.len(), path.display());
    Ok(participants)
}

/// Write the draw as pretty JSON. Returns the id stamped on the file.
pub fn save_results(result: &DrawResult, path: impl AsRef<Path>) -> Result<Uuid, StorageError> {
    let path = path.as_ref();
    let saved = SavedDraw {
        draw_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        matches: result,
    };
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &saved)?;
    log::info!("Results saved to {}", path.display());
    Ok(saved.draw_id)
}
