//! Alert Module
//!
//! Builds immutable alert entries from a telemetry snapshot and keeps the
//! caller-owned history.
//!
//! ## Structure
//! - `types`: Audience, AlertId, AlertLogEntry
//! - `builder`: build_alert_entry() (pure)
//! - `history`: AlertLog (newest first, append-only)
//! - `store`: JSONL persistence
//! - `export`: JSON export bundle, snapshot files
//!
//! ## Usage
//! ```
//! use chrono::Utc;
//! use sentinel_core::logic::alert::{build_alert_entry, AlertLog, Audience};
//! use sentinel_core::logic::telemetry::samples::avalanche_sectors;
//!
//! let mut history = AlertLog::new();
//! let entry = build_alert_entry(&avalanche_sectors(), 75.0, Audience::Public, "Avoid the Rupal Face", Utc::now());
//! history.prepend(entry);
//! assert_eq!(history.len(), 1);
//! ```

pub mod types;
pub mod builder;
pub mod history;
pub mod error;
pub mod store;
pub mod export;

pub use types::{AlertId, AlertLogEntry, Audience};
pub use builder::build_alert_entry;
pub use history::AlertLog;
pub use error::{StoreError, StoreResult};
pub use store::{list_store_files, load_history, read_entries, AlertStore};
pub use export::{export_history, read_snapshot, ExportBundle};
