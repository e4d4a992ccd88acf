//! Result pane model for the interactive front-end.
//!
//! Mirrors a tagged text widget: the pane is a list of text segments, each
//! carrying a tag that decides how it is styled.

use secrecy::SecretString;

use crate::evaluator::{AnalysisError, Estimator};
use crate::strength::{Palette, Score};
use crate::types::{AnalysisRequest, AnalysisResult, CrackTimeScenario};

pub const PLACEHOLDER_MESSAGE: &str = "Results will appear here as you type.";
pub const EMPTY_PROMPT: &str = "Please enter a password.";

/// Styling tag attached to a text segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTag {
    /// Score line, colored by the score's palette.
    Score(Palette),
    Default,
    /// Bold red heading.
    Warning,
    /// Bold blue heading.
    Info,
    /// Italic red message.
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub tag: TextTag,
}

impl Segment {
    fn new(text: impl Into<String>, tag: TextTag) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }
}

/// Progress bar state: fill percentage and the palette, `None` meaning the
/// default style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub value: u8,
    pub palette: Option<Palette>,
}

impl Progress {
    pub fn for_score(score: Score) -> Self {
        Self {
            value: score.progress(),
            palette: Some(score.palette()),
        }
    }
}

/// Everything the result area displays after one refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub segments: Vec<Segment>,
    pub progress: Progress,
}

impl PanelView {
    /// Shown before the first keystroke.
    pub fn placeholder() -> Self {
        Self {
            segments: vec![Segment::new(PLACEHOLDER_MESSAGE, TextTag::Default)],
            progress: Progress::default(),
        }
    }

    pub fn empty_prompt() -> Self {
        Self {
            segments: vec![Segment::new(EMPTY_PROMPT, TextTag::Error)],
            progress: Progress::default(),
        }
    }

    pub fn from_result(result: &AnalysisResult) -> Self {
        let score = result.score;
        let crack_time = result
            .crack_time(CrackTimeScenario::OfflineSlowHashing1e4PerSecond)
            .unwrap_or("N/A");

        let mut segments = vec![
            Segment::new(
                format!("Strength: {}\n", score.label()),
                TextTag::Score(score.palette()),
            ),
            Segment::new(format!("Est. Crack Time: {}\n\n", crack_time), TextTag::Default),
        ];

        if let Some(warning) = result.warning.as_ref().filter(|w| !w.is_empty()) {
            segments.push(Segment::new("Warning:\n", TextTag::Warning));
            segments.push(Segment::new(format!("{}\n\n", warning), TextTag::Default));
        }

        if !result.suggestions.is_empty() {
            segments.push(Segment::new("Suggestions:\n", TextTag::Info));
            for suggestion in &result.suggestions {
                segments.push(Segment::new(format!("  - {}\n", suggestion), TextTag::Default));
            }
        }

        Self {
            segments,
            progress: Progress::for_score(score),
        }
    }

    /// Plain text of the pane, tags dropped.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Re-analyzes the current entry text.
///
/// Empty input yields the prompt view without calling `estimator`. Personal
/// context words are never passed from the interactive front-end.
pub fn refresh<E: Estimator + ?Sized>(
    estimator: &E,
    password: &str,
) -> Result<PanelView, AnalysisError> {
    if password.is_empty() {
        return Ok(PanelView::empty_prompt());
    }
    let request = AnalysisRequest::new(SecretString::new(password.to_string().into()));
    let result = estimator.estimate(&request)?;
    Ok(PanelView::from_result(&result))
}
