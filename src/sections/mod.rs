//! Report sections
//!
//! Each section renders one block of the console report. A section that has
//! nothing to say returns `None` and is left out of the report.

mod components;
mod feedback;
mod header;
mod summary;

pub use components::components_section;
pub use feedback::{suggestions_section, warning_section};
pub use header::header_section;
pub use summary::{crack_time_section, score_section, timing_section};

use crate::types::{AnalysisRequest, AnalysisResult};

/// Inputs every section renders from.
pub struct ReportContext<'a> {
    pub request: &'a AnalysisRequest,
    pub result: &'a AnalysisResult,
}

/// Result type for section render functions.
/// - `Some(text)` - Section output, may span several lines
/// - `None` - Section omitted
pub type SectionResult = Option<String>;

#[cfg(test)]
pub(crate) mod fixtures {
    use std::collections::BTreeMap;
    use std::time::Duration;

    use secrecy::SecretString;

    use crate::strength::Score;
    use crate::types::{
        AnalysisRequest, AnalysisResult, CrackTimeScenario, MatchComponent, MatchOrigin,
        PatternKind,
    };

    pub fn request(password: &str, words: &[&str]) -> AnalysisRequest {
        AnalysisRequest::new(SecretString::new(password.to_string().into()))
            .with_context_words(words.iter().copied())
    }

    pub fn component(
        token: &str,
        start: usize,
        pattern: PatternKind,
        origin: MatchOrigin,
        matched_word: Option<&str>,
    ) -> MatchComponent {
        MatchComponent {
            token: token.to_string(),
            start,
            end: start + token.chars().count() - 1,
            pattern,
            origin,
            matched_word: matched_word.map(str::to_string),
        }
    }

    pub fn result(score: Score) -> AnalysisResult {
        AnalysisResult {
            score,
            sequence: Vec::new(),
            warning: None,
            suggestions: Vec::new(),
            crack_times_display: BTreeMap::from([(
                CrackTimeScenario::OfflineSlowHashing1e4PerSecond,
                "less than a second".to_string(),
            )]),
            elapsed: Duration::from_micros(1234),
        }
    }
}
