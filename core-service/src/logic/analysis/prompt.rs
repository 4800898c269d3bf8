//! Prompt Templates
//!
//! One fixed template per analysis context. Rendering is pure string
//! assembly; sending the prompt is the caller's job.

use super::context::AnalysisContext;
use crate::logic::risk::{classify, RiskLevel};
use crate::logic::telemetry::TelemetrySummary;

/// Shown in place of generated text when the text service fails
pub const FALLBACK_MESSAGE: &str =
    "Sorry, the analysis service is unavailable right now. Sector readings and thresholds are unchanged; please try again shortly.";

/// Instruction block per context
fn task_for(context: AnalysisContext) -> &'static str {
    match context {
        AnalysisContext::Seismic => {
            "Assess seismic hazard for the listed sectors. Forecast short-term event frequency with an ARIMA-style trend reading and call out aftershock exposure."
        }
        AnalysisContext::Glacier => {
            "Assess glacier stability and glacial lake outburst potential for the listed sectors. Comment on retreat rate and meltwater loading."
        }
        AnalysisContext::Avalanche => {
            "Assess avalanche release probability for the listed slopes. Run a Monte Carlo style reasoning over snowpack scenarios and recommend closures."
        }
        AnalysisContext::Tectonic => {
            "Assess tectonic strain accumulation along the listed sectors and relate it to regional plate convergence."
        }
        AnalysisContext::Ecosystem => {
            "Assess ecosystem stress for the listed sectors, including species migration modeling under the observed risk levels."
        }
    }
}

/// Render the prompt for `context` from a snapshot summary
pub fn render_prompt(context: AnalysisContext, summary: &TelemetrySummary, threshold: f64) -> String {
    let level: RiskLevel = classify(summary.max_score);

    let affected = if summary.affected.is_empty() {
        "none".to_string()
    } else {
        summary
            .affected
            .iter()
            .map(|r| format!("{} ({:.0}%, {})", r.zone, r.clamped_score(), r.trend))
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "Context: {context} analysis, Himalayan region.\n\
         Sectors reporting: {total}. Alert threshold: {threshold:.0}%.\n\
         Sectors above threshold: {affected}.\n\
         Peak risk score: {max:.0}% ({level}).\n\
         Task: {task}\n\
         Respond in markdown with a short summary, key risks and recommended actions.",
        context = context,
        total = summary.total,
        threshold = threshold,
        affected = affected,
        max = summary.max_score,
        level = level,
        task = task_for(context),
    )
}

/// Use the generated text when present, else the fallback
pub fn message_or_fallback(generated: Option<&str>) -> String {
    match generated.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => FALLBACK_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::telemetry::{samples::avalanche_sectors, summarize};

    #[test]
    fn test_every_context_renders() {
        let summary = summarize(&avalanche_sectors(), 75.0);
        for context in AnalysisContext::all() {
            let prompt = render_prompt(context, &summary, 75.0);
            assert!(prompt.contains(context.as_str()));
            assert!(prompt.contains("Rupal Face (92%, Critical)"));
            assert!(prompt.contains("Peak risk score: 92% (critical)"));
        }
    }

    #[test]
    fn test_avalanche_prompt_mentions_monte_carlo() {
        let summary = summarize(&avalanche_sectors(), 75.0);
        let prompt = render_prompt(AnalysisContext::Avalanche, &summary, 75.0);
        assert!(prompt.contains("Monte Carlo"));
    }

    #[test]
    fn test_empty_snapshot_prompt() {
        let summary = summarize(&[], 50.0);
        let prompt = render_prompt(AnalysisContext::Glacier, &summary, 50.0);
        assert!(prompt.contains("Sectors above threshold: none."));
        assert!(prompt.contains("Sectors reporting: 0."));
    }

    #[test]
    fn test_fallback_message() {
        assert_eq!(message_or_fallback(Some("  ## Report  ")), "## Report");
        assert_eq!(message_or_fallback(Some("   ")), FALLBACK_MESSAGE);
        assert_eq!(message_or_fallback(None), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_context_parsing() {
        assert_eq!("Avalanche".parse::<AnalysisContext>().unwrap(), AnalysisContext::Avalanche);
        assert!("volcanic".parse::<AnalysisContext>().is_err());
    }
}
