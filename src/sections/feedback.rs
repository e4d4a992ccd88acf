//! Feedback sections - estimator warning and suggestions.

use super::{ReportContext, SectionResult};

pub fn warning_section(ctx: &ReportContext<'_>) -> SectionResult {
    ctx.result
        .warning
        .as_ref()
        .filter(|w| !w.is_empty())
        .map(|w| format!("\nWarning:          {}", w))
}

pub fn suggestions_section(ctx: &ReportContext<'_>) -> SectionResult {
    if ctx.result.suggestions.is_empty() {
        return None;
    }
    let mut out = String::from("\nSuggestions:");
    for suggestion in &ctx.result.suggestions {
        out.push_str(&format!("\n  - {}", suggestion));
    }
    Some(out)
}
