//! Analysis Module
//!
//! Lookup table from analysis context to prompt template, plus the fixed
//! fallback text used when generation fails.

pub mod context;
pub mod prompt;

pub use context::AnalysisContext;
pub use prompt::{message_or_fallback, render_prompt, FALLBACK_MESSAGE};
