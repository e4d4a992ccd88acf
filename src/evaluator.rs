//! Estimator adapter - runs zxcvbn and converts its output.

use std::collections::BTreeMap;
use std::time::Instant;

use secrecy::ExposeSecret;
use thiserror::Error;
use zxcvbn::matching::Match;
use zxcvbn::matching::patterns::MatchPattern;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::strength::Score;
use crate::types::{
    AnalysisRequest, AnalysisResult, CrackTimeScenario, MatchComponent, MatchOrigin, PatternKind,
};

/// Dictionary name zxcvbn gives to matches against the request's context words.
const USER_INPUTS_DICTIONARY: &str = "user_inputs";

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Password is empty")]
    EmptyPassword,
    #[error("Estimator failed: {0}")]
    Estimator(#[from] zxcvbn::ZxcvbnError),
    #[error("Estimator returned score {0}, expected 0-4")]
    ScoreOutOfRange(u8),
}

/// Something that can turn a request into a strength analysis.
pub trait Estimator {
    fn estimate(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError>;
}

/// Production estimator backed by the `zxcvbn` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZxcvbnEstimator;

impl Estimator for ZxcvbnEstimator {
    fn estimate(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        analyze_password(request)
    }
}

/// Analyzes a password against its context words.
///
/// # Errors
/// Returns [`AnalysisError::EmptyPassword`] for an empty password; the
/// estimator is not called in that case.
pub fn analyze_password(request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
    if request.is_empty() {
        return Err(AnalysisError::EmptyPassword);
    }

    let password = request.password().expose_secret();
    let user_inputs: Vec<&str> = request.context_words().iter().map(String::as_str).collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "running estimator with {} context word(s)",
        user_inputs.len()
    );

    let started = Instant::now();
    let entropy = zxcvbn::zxcvbn(password, &user_inputs)?;
    let elapsed = started.elapsed();

    let score = Score::try_from(entropy.score())?;

    let feedback = entropy.feedback().as_ref();
    let warning = feedback
        .and_then(|f| f.warning())
        .map(|w| w.to_string());
    let suggestions = feedback
        .map(|f| f.suggestions().iter().map(ToString::to_string).collect())
        .unwrap_or_default();

    let times = entropy.crack_times();
    let crack_times_display = BTreeMap::from([
        (
            CrackTimeScenario::OnlineThrottling100PerHour,
            times.online_throttling_100_per_hour().to_string(),
        ),
        (
            CrackTimeScenario::OnlineNoThrottling10PerSecond,
            times.online_no_throttling_10_per_second().to_string(),
        ),
        (
            CrackTimeScenario::OfflineSlowHashing1e4PerSecond,
            times.offline_slow_hashing_1e4_per_second().to_string(),
        ),
        (
            CrackTimeScenario::OfflineFastHashing1e10PerSecond,
            times.offline_fast_hashing_1e10_per_second().to_string(),
        ),
    ]);

    let sequence: Vec<MatchComponent> = entropy.sequence().iter().map(to_component).collect();

    #[cfg(feature = "tracing")]
    tracing::info!(
        "analysis finished: score {} with {} component(s) in {:?}",
        score.value(),
        sequence.len(),
        elapsed
    );

    Ok(AnalysisResult {
        score,
        sequence,
        warning,
        suggestions,
        crack_times_display,
        elapsed,
    })
}

fn to_component(m: &Match) -> MatchComponent {
    let (pattern, origin, matched_word) = match &m.pattern {
        MatchPattern::Dictionary(d) => {
            let dictionary = snake_case(&format!("{:?}", d.dictionary_name));
            let origin = if dictionary == USER_INPUTS_DICTIONARY {
                MatchOrigin::PersonalInput
            } else {
                MatchOrigin::Dictionary(dictionary)
            };
            (PatternKind::Dictionary, origin, Some(d.matched_word.clone()))
        }
        MatchPattern::Regex(r) => (
            PatternKind::Regex,
            MatchOrigin::Regex(r.regex_name.to_string()),
            None,
        ),
        MatchPattern::Spatial(_) => (PatternKind::Spatial, MatchOrigin::Other, None),
        MatchPattern::Repeat(_) => (PatternKind::Repeat, MatchOrigin::Other, None),
        MatchPattern::Sequence(_) => (PatternKind::Sequence, MatchOrigin::Other, None),
        MatchPattern::Date(_) => (PatternKind::Date, MatchOrigin::Other, None),
        MatchPattern::BruteForce => (PatternKind::BruteForce, MatchOrigin::Other, None),
    };

    MatchComponent {
        token: m.token.clone(),
        start: m.i,
        end: m.j,
        pattern,
        origin,
        matched_word,
    }
}

/// `UsTvAndFilm` -> `us_tv_and_film`
fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (idx, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if idx > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Async version that sends the analysis outcome via channel.
///
/// Nothing is sent when `token` is cancelled before or during the analysis.
#[cfg(feature = "async")]
pub async fn analyze_password_tx(
    request: AnalysisRequest,
    token: CancellationToken,
    tx: mpsc::Sender<Result<AnalysisResult, AnalysisError>>,
) {
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("analysis cancelled before start");
        return;
    }

    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    let outcome = analyze_password(&request);

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("analysis cancelled, dropping result");
        return;
    }

    if let Err(e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password analysis result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn request(password: &str, words: &[&str]) -> AnalysisRequest {
        AnalysisRequest::new(SecretString::new(password.to_string().into()))
            .with_context_words(words.iter().copied())
    }

    #[test]
    fn test_empty_password_is_rejected() {
        let result = analyze_password(&request("", &[]));
        assert!(matches!(result, Err(AnalysisError::EmptyPassword)));
    }

    #[test]
    fn test_common_password_scores_very_weak() {
        let result = analyze_password(&request("password", &[])).unwrap();
        assert_eq!(result.score, Score::VeryWeak);
        assert!(result.warning.is_some());
    }

    #[test]
    fn test_long_random_password_scores_strong() {
        let result = analyze_password(&request("x7#Qp!v9Lz@2mWr$Tk8e", &[])).unwrap();
        assert_eq!(result.score, Score::Strong);
    }

    #[test]
    fn test_unmatched_characters_are_brute_force() {
        let result = analyze_password(&request("x7#Qp!v9Lz@2mWr$Tk8e", &[])).unwrap();
        let brute_force: Vec<&MatchComponent> = result
            .sequence
            .iter()
            .filter(|c| c.pattern == PatternKind::BruteForce)
            .collect();
        assert!(!brute_force.is_empty());
        assert!(brute_force.iter().all(|c| c.origin == MatchOrigin::Other));
        assert!(brute_force.iter().all(|c| c.matched_word.is_none()));
    }

    #[test]
    fn test_personal_words_are_flagged() {
        let result = analyze_password(&request("Fluffy1990", &["Fluffy", "1990"])).unwrap();
        let tokens: Vec<&str> = result
            .personal_components()
            .map(|c| c.token.as_str())
            .collect();
        assert!(tokens.len() >= 2, "expected two personal components, got {:?}", tokens);
        assert!(tokens.contains(&"Fluffy"));
        assert!(tokens.contains(&"1990"));
    }

    #[test]
    fn test_verbatim_personal_word() {
        let result = analyze_password(&request("bartholomew", &["bartholomew"])).unwrap();
        assert_eq!(result.sequence.len(), 1);
        let component = &result.sequence[0];
        assert_eq!(component.origin, MatchOrigin::PersonalInput);
        assert_eq!(component.pattern, PatternKind::Dictionary);
        assert_eq!(component.matched_word.as_deref(), Some("bartholomew"));
    }

    #[test]
    fn test_without_context_words_no_personal_match() {
        let result = analyze_password(&request("Fluffy1990", &[])).unwrap();
        assert_eq!(result.personal_components().count(), 0);
    }

    #[test]
    fn test_tokens_reconstruct_password() {
        for pwd in ["Fluffy1990", "correcthorsebatterystaple", "qwerty!!!2024", "aaaaZZ9"] {
            let result = analyze_password(&request(pwd, &["Fluffy"])).unwrap();
            assert_eq!(result.reconstruct(pwd), pwd);
        }
    }

    #[test]
    fn test_all_crack_time_scenarios_present() {
        let result = analyze_password(&request("Tr0ub4dour&3", &[])).unwrap();
        assert_eq!(result.crack_times_display.len(), 4);
        assert!(
            result
                .crack_time(CrackTimeScenario::OfflineSlowHashing1e4PerSecond)
                .is_some()
        );
    }

    #[test]
    fn test_score_always_in_range() {
        for pwd in ["a", "abc123", "P@ssw0rd", "zxcvbnm", "1q2w3e4r5t", "horse staple 91!"] {
            let result = analyze_password(&request(pwd, &[])).unwrap();
            assert!(result.score.value() <= 4);
        }
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("UserInputs"), "user_inputs");
        assert_eq!(snake_case("UsTvAndFilm"), "us_tv_and_film");
        assert_eq!(snake_case("Passwords"), "passwords");
    }
}

#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use secrecy::SecretString;

    fn request(password: &str) -> AnalysisRequest {
        AnalysisRequest::new(SecretString::new(password.to_string().into()))
    }

    #[tokio::test]
    async fn test_analyze_password_tx_sends_result() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        analyze_password_tx(request("TestPass123!"), token, tx).await;

        let outcome = rx.recv().await.expect("Should receive analysis");
        assert!(outcome.is_ok());
    }

    #[tokio::test]
    async fn test_analyze_password_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        analyze_password_tx(request("TestPass123!"), token, tx).await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_analyze_password_tx_forwards_errors() {
        let (tx, mut rx) = mpsc::channel(1);

        analyze_password_tx(request(""), CancellationToken::new(), tx).await;

        let outcome = rx.recv().await.expect("Should receive analysis");
        assert!(matches!(outcome, Err(AnalysisError::EmptyPassword)));
    }
}
