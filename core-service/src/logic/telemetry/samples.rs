//! Sample Sector Data
//!
//! Built-in avalanche snapshot for the Nanga Parbat massif, used when no
//! snapshot file is supplied.

use super::reading::SectorReading;
use crate::logic::risk::Trend;

pub fn avalanche_sectors() -> Vec<SectorReading> {
    vec![
        SectorReading::new("Rakhiot Face", 85.0, Trend::HighRisk),
        SectorReading::new("Diamir Base", 45.0, Trend::Moderate),
        SectorReading::new("Rupal Face", 92.0, Trend::Critical),
        SectorReading::new("Mazeno Ridge", 38.0, Trend::Stable),
        SectorReading::new("Fairy Meadows", 22.0, Trend::LowRisk),
        SectorReading::new("Raikot Glacier", 67.0, Trend::Unstable),
    ]
}
