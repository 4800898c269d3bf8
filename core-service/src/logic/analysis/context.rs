//! Analysis contexts offered by the dashboard views

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisContext {
    Seismic,
    Glacier,
    Avalanche,
    Tectonic,
    Ecosystem,
}

impl AnalysisContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisContext::Seismic => "seismic",
            AnalysisContext::Glacier => "glacier",
            AnalysisContext::Avalanche => "avalanche",
            AnalysisContext::Tectonic => "tectonic",
            AnalysisContext::Ecosystem => "ecosystem",
        }
    }

    pub fn all() -> [AnalysisContext; 5] {
        [
            AnalysisContext::Seismic,
            AnalysisContext::Glacier,
            AnalysisContext::Avalanche,
            AnalysisContext::Tectonic,
            AnalysisContext::Ecosystem,
        ]
    }
}

impl std::fmt::Display for AnalysisContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AnalysisContext {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnalysisContext::all()
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown analysis context: {}", s))
    }
}
