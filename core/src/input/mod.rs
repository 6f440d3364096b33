//! Loading of the two persisted lookup tables
//!
//! Both tables are JSON objects keyed by study identifier. `BTreeMap` is
//! used throughout so that iteration order is sorted by study and the
//! downstream pairing order stays deterministic.

use crate::error::Result;
use log::debug;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Raw EF readings for one study, keyed by rater identifier
pub type RaterReadings = BTreeMap<String, f64>;

/// Cardiologist overreads: study -> rater -> raw EF reading (percent)
pub type OverreadTable = BTreeMap<String, RaterReadings>;

/// Predicted EF values for one study, keyed by elementary view key
pub type ViewPredictions = BTreeMap<String, f64>;

/// Algorithm predictions: study -> elementary view key -> predicted EF
pub type PredictionTable = BTreeMap<String, ViewPredictions>;

/// Loads the cardiologist overread table from a JSON file
pub fn load_overreads(path: &Path) -> Result<OverreadTable> {
    let bytes = fs::read(path)?;
    let table: OverreadTable = serde_json::from_slice(&bytes)?;
    debug!(
        "Loaded {} overread studies from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

/// Loads the algorithm prediction table from a JSON file
pub fn load_predictions(path: &Path) -> Result<PredictionTable> {
    let bytes = fs::read(path)?;
    let table: PredictionTable = serde_json::from_slice(&bytes)?;
    debug!(
        "Loaded {} predicted studies from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EchocatError;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_overreads() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "cardio_dict.json",
            r#"{"s1": {"r1": 50.0, "r2": 60.0}, "s2": {"r1": 45.5}}"#,
        );

        let table = load_overreads(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table["s1"]["r2"], 60.0);
        assert_eq!(table["s2"]["r1"], 45.5);
    }

    #[test]
    fn test_load_predictions() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "predicted_dict.json",
            r#"{"s1": {"plax_ef": 52.0, "ap4_ef": 48.0}}"#,
        );

        let table = load_predictions(&path).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table["s1"]["plax_ef"], 52.0);
        assert_eq!(table["s1"]["ap4_ef"], 48.0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_overreads(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, EchocatError::Io(_)));
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "bad.json", r#"{"s1": [1, 2]}"#);
        let err = load_overreads(&path).unwrap_err();
        assert!(matches!(err, EchocatError::Json(_)));
    }
}
