//! Himalayan Sentinel - Risk & Alert Core
//!
//! Classifies sector risk scores, summarizes telemetry snapshots against an
//! alert threshold, and builds immutable alert log entries.

pub mod constants;
pub mod logic;
