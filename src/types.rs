//! Request and result types exchanged with the estimator adapter.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::strength::Score;

/// A password plus the personal words it should be checked against.
#[derive(Debug)]
pub struct AnalysisRequest {
    password: SecretString,
    context_words: Vec<String>,
}

impl AnalysisRequest {
    pub fn new(password: SecretString) -> Self {
        Self {
            password,
            context_words: Vec::new(),
        }
    }

    pub fn with_context_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.context_words.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }

    pub fn context_words(&self) -> &[String] {
        &self.context_words
    }

    pub fn is_empty(&self) -> bool {
        self.password.expose_secret().is_empty()
    }
}

/// Attack scenario a crack time estimate refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CrackTimeScenario {
    OnlineThrottling100PerHour,
    OnlineNoThrottling10PerSecond,
    OfflineSlowHashing1e4PerSecond,
    OfflineFastHashing1e10PerSecond,
}

impl CrackTimeScenario {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OnlineThrottling100PerHour => "online_throttling_100_per_hour",
            Self::OnlineNoThrottling10PerSecond => "online_no_throttling_10_per_second",
            Self::OfflineSlowHashing1e4PerSecond => "offline_slow_hashing_1e4_per_second",
            Self::OfflineFastHashing1e10PerSecond => "offline_fast_hashing_1e10_per_second",
        }
    }
}

impl fmt::Display for CrackTimeScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of pattern the estimator recognised in a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Dictionary,
    Spatial,
    Repeat,
    Sequence,
    Regex,
    Date,
    BruteForce,
}

impl PatternKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dictionary => "dictionary",
            Self::Spatial => "spatial",
            Self::Repeat => "repeat",
            Self::Sequence => "sequence",
            Self::Regex => "regex",
            Self::Date => "date",
            Self::BruteForce => "bruteforce",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a component's match came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOrigin {
    /// One of the context words supplied with the request.
    PersonalInput,
    /// A built-in frequency list, e.g. `passwords` or `english_wikipedia`.
    Dictionary(String),
    /// A named regex, e.g. `recent_year`.
    Regex(String),
    Other,
}

impl MatchOrigin {
    pub fn is_personal(&self) -> bool {
        matches!(self, MatchOrigin::PersonalInput)
    }
}

/// A contiguous piece of the password classified by the estimator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchComponent {
    pub token: String,
    /// First character index of the token in the password.
    pub start: usize,
    /// Last character index of the token in the password (inclusive).
    pub end: usize,
    pub pattern: PatternKind,
    pub origin: MatchOrigin,
    pub matched_word: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub score: Score,
    pub sequence: Vec<MatchComponent>,
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
    pub crack_times_display: BTreeMap<CrackTimeScenario, String>,
    pub elapsed: Duration,
}

impl AnalysisResult {
    pub fn crack_time(&self, scenario: CrackTimeScenario) -> Option<&str> {
        self.crack_times_display.get(&scenario).map(String::as_str)
    }

    pub fn personal_components(&self) -> impl Iterator<Item = &MatchComponent> {
        self.sequence.iter().filter(|c| c.origin.is_personal())
    }

    /// Rebuilds the password from the match tokens, filling any characters
    /// not covered by a component from `password`.
    pub fn reconstruct(&self, password: &str) -> String {
        let chars: Vec<char> = password.chars().collect();
        let mut out = String::with_capacity(password.len());
        let mut cursor = 0;

        for component in &self.sequence {
            if component.start > cursor {
                out.extend(chars.iter().take(component.start).skip(cursor));
            }
            out.push_str(&component.token);
            cursor = cursor.max(component.end + 1);
        }
        if cursor < chars.len() {
            out.extend(&chars[cursor..]);
        }
        out
    }
}
