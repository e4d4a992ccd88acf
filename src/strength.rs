//! Score lookup table - maps the estimator's 0-4 score to labels, colors
//! and progress bar fill.

use std::fmt;

use crate::evaluator::AnalysisError;

/// Strength score reported by the estimator.
///
/// The enum is closed over the five values the estimator can return, so every
/// score has exactly one label and one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    VeryWeak = 0,
    Weak = 1,
    Fair = 2,
    Good = 3,
    Strong = 4,
}

/// Named color used for score text and the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub rgb: (u8, u8, u8),
}

pub const RED: Palette = Palette { name: "red", rgb: (0xd9, 0x53, 0x4f) };
pub const ORANGE: Palette = Palette { name: "orange", rgb: (0xf0, 0xad, 0x4e) };
pub const DARK_GOLDENROD: Palette = Palette { name: "darkgoldenrod", rgb: (0xb5, 0x89, 0x00) };
pub const BLUE: Palette = Palette { name: "blue", rgb: (0x02, 0x75, 0xd8) };
pub const GREEN: Palette = Palette { name: "green", rgb: (0x5c, 0xb8, 0x5c) };

/// Trough color behind the progress bar fill.
pub const TROUGH: Palette = Palette { name: "trough", rgb: (0xf2, 0xf2, 0xf2) };

impl Score {
    pub const ALL: [Score; 5] = [
        Score::VeryWeak,
        Score::Weak,
        Score::Fair,
        Score::Good,
        Score::Strong,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Label with its leading emoji, e.g. `✅ Good`.
    pub fn label(self) -> &'static str {
        match self {
            Score::VeryWeak => "❌ Very Weak",
            Score::Weak => "🔥 Weak",
            Score::Fair => "⚠️ Fair",
            Score::Good => "✅ Good",
            Score::Strong => "💪 Strong",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Score::VeryWeak => RED,
            Score::Weak => ORANGE,
            Score::Fair => DARK_GOLDENROD,
            Score::Good => BLUE,
            Score::Strong => GREEN,
        }
    }

    /// Progress bar fill in percent: 20 per step, so a very weak password
    /// still shows a visible red bar.
    pub fn progress(self) -> u8 {
        (self.value() + 1) * 20
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/4)", self.label(), self.value())
    }
}

impl TryFrom<u8> for Score {
    type Error = AnalysisError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Score::VeryWeak),
            1 => Ok(Score::Weak),
            2 => Ok(Score::Fair),
            3 => Ok(Score::Good),
            4 => Ok(Score::Strong),
            other => Err(AnalysisError::ScoreOutOfRange(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_score_has_distinct_label_and_color() {
        let labels: HashSet<_> = Score::ALL.iter().map(|s| s.label()).collect();
        let colors: HashSet<_> = Score::ALL.iter().map(|s| s.palette().name).collect();
        assert_eq!(labels.len(), 5);
        assert_eq!(colors.len(), 5);
    }

    #[test]
    fn test_try_from_covers_full_range() {
        for value in 0u8..=4 {
            let score = Score::try_from(value).expect("in-range score");
            assert_eq!(score.value(), value);
        }
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert!(matches!(
            Score::try_from(5),
            Err(AnalysisError::ScoreOutOfRange(5))
        ));
    }

    #[test]
    fn test_progress_steps() {
        let fills: Vec<u8> = Score::ALL.iter().map(|s| s.progress()).collect();
        assert_eq!(fills, vec![20, 40, 60, 80, 100]);
    }

    #[test]
    fn test_display_includes_fraction() {
        assert_eq!(Score::Fair.to_string(), "⚠️ Fair (2/4)");
        assert_eq!(Score::VeryWeak.to_string(), "❌ Very Weak (0/4)");
    }

    #[test]
    fn test_palette_hex_values() {
        assert_eq!(Score::VeryWeak.palette().rgb, (0xd9, 0x53, 0x4f));
        assert_eq!(Score::Strong.palette().name, "green");
    }
}
