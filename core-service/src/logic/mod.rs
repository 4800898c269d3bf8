//! Logic Module - Risk & Alert Core
//!
//! Control flow: telemetry summary -> risk classifier -> alert builder.
//! Everything here is synchronous; the only I/O lives in `alert::store`
//! and `alert::export`.

pub mod risk;
pub mod telemetry;
pub mod alert;
pub mod analysis;
