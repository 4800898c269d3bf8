use super::reading::SectorReading;
use super::samples::avalanche_sectors;
use super::summary::summarize;
use crate::logic::risk::Trend;

fn nanga_parbat() -> Vec<SectorReading> {
    vec![
        SectorReading::new("Rakhiot Face", 85.0, Trend::HighRisk),
        SectorReading::new("Diamir Base", 45.0, Trend::Moderate),
        SectorReading::new("Rupal Face", 92.0, Trend::Critical),
    ]
}

#[test]
fn test_empty_snapshot_has_zero_floor() {
    for t in [-10.0, 0.0, 50.0, 100.0, 500.0] {
        let summary = summarize(&[], t);
        assert_eq!(summary.max_score, 0.0);
        assert!(summary.affected.is_empty());
        assert_eq!(summary.total, 0);
    }
}

#[test]
fn test_affected_preserves_input_order() {
    let summary = summarize(&nanga_parbat(), 75.0);
    assert_eq!(summary.affected_zones(), vec!["Rakhiot Face", "Rupal Face"]);
    assert_eq!(summary.max_score, 92.0);
    assert_eq!(summary.affected_count(), 2);
    assert_eq!(summary.total, 3);
}

#[test]
fn test_max_score_is_global_even_when_nothing_affected() {
    let summary = summarize(&nanga_parbat(), 95.0);
    assert!(summary.affected.is_empty());
    assert_eq!(summary.max_score, 92.0);
}

#[test]
fn test_threshold_is_strict() {
    let readings = vec![
        SectorReading::new("Edge", 75.0, Trend::Unstable),
        SectorReading::new("Over", 75.5, Trend::Unstable),
    ];
    let summary = summarize(&readings, 75.0);
    assert_eq!(summary.affected_zones(), vec!["Over"]);
}

#[test]
fn test_affected_is_exact_filter() {
    let readings = avalanche_sectors();
    for t in [0.0, 22.0, 40.0, 67.0, 85.0, 92.0, 100.0] {
        let summary = summarize(&readings, t);
        let expected: Vec<&SectorReading> = readings.iter().filter(|r| r.risk_score > t).collect();
        assert_eq!(summary.affected.len(), expected.len(), "threshold {}", t);
        for (got, want) in summary.affected.iter().zip(expected) {
            assert_eq!(got, want);
        }
    }
}

#[test]
fn test_out_of_range_scores_are_clamped() {
    let readings = vec![
        SectorReading::new("Sensor Glitch", 140.0, Trend::Critical),
        SectorReading::new("Negative", -20.0, Trend::Stable),
    ];
    let summary = summarize(&readings, 50.0);
    assert_eq!(summary.max_score, 100.0);
    assert_eq!(summary.affected_zones(), vec!["Sensor Glitch"]);

    let all_negative = vec![SectorReading::new("Negative", -20.0, Trend::Stable)];
    assert_eq!(summarize(&all_negative, -50.0).max_score, 0.0);
}

#[test]
fn test_input_is_not_mutated() {
    let readings = nanga_parbat();
    let before = readings.clone();
    let _ = summarize(&readings, 10.0);
    assert_eq!(readings, before);
}

#[test]
fn test_reading_json_shape() {
    let json = r#"{"zone":"Rupal Face","riskScore":92,"trend":"Critical"}"#;
    let reading: SectorReading = serde_json::from_str(json).unwrap();
    assert_eq!(reading.zone, "Rupal Face");
    assert_eq!(reading.risk_score, 92.0);
    assert_eq!(reading.trend, Trend::Critical);

    let no_trend: SectorReading = serde_json::from_str(r#"{"zone":"X","riskScore":1.5}"#).unwrap();
    assert_eq!(no_trend.trend, Trend::Stable);
}
