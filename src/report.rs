//! Console report - runs the report sections in order and joins their output.

use crate::evaluator::{AnalysisError, Estimator};
use crate::sections::{
    ReportContext, SectionResult, components_section, crack_time_section, header_section,
    score_section, suggestions_section, timing_section, warning_section,
};
use crate::types::{AnalysisRequest, AnalysisResult};

/// Renders the full console report for an analyzed request.
pub fn render_report(request: &AnalysisRequest, result: &AnalysisResult) -> String {
    let ctx = ReportContext { request, result };

    // Orchestrator: render sections in sequence
    let sections: Vec<(&str, fn(&ReportContext<'_>) -> SectionResult)> = vec![
        ("header", header_section),
        ("score", score_section),
        ("crack_time", crack_time_section),
        ("warning", warning_section),
        ("suggestions", suggestions_section),
        ("components", components_section),
        ("timing", timing_section),
    ];

    let mut blocks = Vec::with_capacity(sections.len());
    for (section_name, section_fn) in sections {
        match section_fn(&ctx) {
            Some(block) => blocks.push(block),
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!("report section {} omitted", section_name);
                #[cfg(not(feature = "tracing"))]
                let _ = section_name;
            }
        }
    }
    blocks.join("\n")
}

/// Runs `estimator` on `request` and renders the report.
pub fn analyze_and_report<E: Estimator + ?Sized>(
    estimator: &E,
    request: &AnalysisRequest,
) -> Result<String, AnalysisError> {
    let result = estimator.estimate(request)?;
    Ok(render_report(request, &result))
}
