//! Alert Export
//!
//! JSON export bundle: the alert history plus an optional telemetry
//! snapshot. Also reads snapshot files supplied by the operator.

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::error::{StoreError, StoreResult};
use super::history::AlertLog;
use super::types::AlertLogEntry;
use crate::constants::APP_VERSION;
use crate::logic::telemetry::SectorReading;

/// Export document written to disk or returned over HTTP
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle<'a> {
    pub generated_at: DateTime<Utc>,
    pub app_version: &'static str,
    /// Newest first
    pub entries: &'a [AlertLogEntry],
    pub snapshot: Option<&'a [SectorReading]>,
}

impl<'a> ExportBundle<'a> {
    pub fn new(history: &'a AlertLog, snapshot: Option<&'a [SectorReading]>, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            app_version: APP_VERSION,
            entries: history.entries(),
            snapshot,
        }
    }

    pub fn to_json_pretty(&self) -> StoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write the bundle to `destination`; returns the number of entries exported
pub fn export_history(
    history: &AlertLog,
    snapshot: Option<&[SectorReading]>,
    destination: &Path,
) -> StoreResult<usize> {
    let bundle = ExportBundle::new(history, snapshot, Utc::now());
    let json = bundle.to_json_pretty()?;

    let mut file = std::fs::File::create(destination)?;
    file.write_all(json.as_bytes())?;

    log::info!("Exported {} alert(s) to {:?}", history.len(), destination);
    Ok(history.len())
}

/// Read a snapshot file: a JSON array of sector readings
pub fn read_snapshot(path: &Path) -> StoreResult<Vec<SectorReading>> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| StoreError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::alert::{build_alert_entry, Audience};
    use crate::logic::telemetry::samples::avalanche_sectors;
    use tempfile::TempDir;

    #[test]
    fn test_export_bundle_shape() {
        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().join("alerts.json");

        let snapshot = avalanche_sectors();
        let mut log = AlertLog::new();
        log.prepend(build_alert_entry(&snapshot, 75.0, Audience::Researchers, "first", Utc::now()));
        log.prepend(build_alert_entry(&snapshot, 90.0, Audience::Public, "second", Utc::now()));

        let count = export_history(&log, Some(&snapshot), &dest).unwrap();
        assert_eq!(count, 2);

        let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&dest).unwrap()).unwrap();
        assert_eq!(value["appVersion"], APP_VERSION);
        assert_eq!(value["entries"].as_array().unwrap().len(), 2);
        assert_eq!(value["entries"][0]["message"], "second");
        assert_eq!(value["snapshot"][0]["zone"], "Rakhiot Face");
        assert!(value["generatedAt"].is_string());
    }

    #[test]
    fn test_export_without_snapshot() {
        let history = AlertLog::new();
        let bundle = ExportBundle::new(&history, None, Utc::now());
        let value: serde_json::Value = serde_json::from_str(&bundle.to_json_pretty().unwrap()).unwrap();
        assert!(value["snapshot"].is_null());
        assert_eq!(value["entries"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_read_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snapshot.json");
        std::fs::write(
            &path,
            r#"[{"zone":"Rakhiot Face","riskScore":85,"trend":"High Risk"},{"zone":"Diamir Base","riskScore":45,"trend":"Moderate"}]"#,
        )
        .unwrap();

        let readings = read_snapshot(&path).unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[1].zone, "Diamir Base");
    }

    #[test]
    fn test_read_snapshot_reports_parse_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "[{\"zone\":").unwrap();

        match read_snapshot(&path) {
            Err(StoreError::Parse { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
