//! Summary sections - score, crack time and analysis timing.

use crate::types::CrackTimeScenario;

use super::{ReportContext, SectionResult};

pub fn score_section(ctx: &ReportContext<'_>) -> SectionResult {
    Some(format!("Strength Score:   {}", ctx.result.score))
}

/// Crack time for an offline attack against a slow hash (1e4 guesses/s).
pub fn crack_time_section(ctx: &ReportContext<'_>) -> SectionResult {
    let crack_time = ctx
        .result
        .crack_time(CrackTimeScenario::OfflineSlowHashing1e4PerSecond)
        .unwrap_or("N/A");
    Some(format!("Est. Crack Time:  {} (offline, slow hash)", crack_time))
}

pub fn timing_section(ctx: &ReportContext<'_>) -> SectionResult {
    let ms = ctx.result.elapsed.as_secs_f64() * 1000.0;
    Some(format!("\nAnalysis completed in {:.2} ms", ms))
}
