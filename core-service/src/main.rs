//! Himalayan Sentinel - one-shot alert runner
//!
//! Reads a snapshot (or the built-in sample sectors), builds one alert entry,
//! appends it to the local alert store and prints the resulting history head.

use std::process::ExitCode;

use chrono::Utc;

use sentinel_core::constants;
use sentinel_core::logic::alert::{self, AlertStore, StoreResult};
use sentinel_core::logic::analysis::message_or_fallback;
use sentinel_core::logic::risk::disagreeing_trends;
use sentinel_core::logic::telemetry::{samples, summarize, SectorReading};

fn load_readings() -> StoreResult<Vec<SectorReading>> {
    match constants::get_snapshot_path() {
        Some(path) => {
            log::info!("Reading snapshot from {:?}", path);
            alert::read_snapshot(&path)
        }
        None => {
            log::info!("No snapshot given - using built-in avalanche sectors");
            Ok(samples::avalanche_sectors())
        }
    }
}

fn run() -> StoreResult<()> {
    let threshold = constants::get_alert_threshold();
    let audience = constants::get_audience();
    let store_dir = constants::get_store_dir();

    let readings = load_readings()?;
    let summary = summarize(&readings, threshold);
    log::info!(
        "{} sector(s), {} above {:.0}%, peak {:.0}%",
        summary.total,
        summary.affected_count(),
        threshold,
        summary.max_score
    );

    for (zone, trend, level) in disagreeing_trends(&readings) {
        log::warn!("Trend label '{}' on {} disagrees with score bucket {}", trend, zone, level);
    }

    let message = message_or_fallback(constants::get_message().as_deref());
    let entry = alert::build_alert_entry(&readings, threshold, audience, &message, Utc::now());

    let mut store = AlertStore::open(&store_dir)?;
    store.append(&entry)?;

    let history = alert::load_history(&store_dir)?;
    log::info!("Alert {} logged ({} total in history)", entry.id(), history.len());

    println!(
        "[{}] {} alert for {}: {}",
        entry.timestamp().to_rfc3339(),
        entry.risk_level(),
        entry.audience(),
        if entry.affected_zones().is_empty() {
            "no sectors above threshold".to_string()
        } else {
            entry.affected_zones().join(", ")
        }
    );

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting {} v{}...", constants::APP_NAME, constants::APP_VERSION);

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Alert run failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
