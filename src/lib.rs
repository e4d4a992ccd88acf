//! Password strength analysis library
//!
//! Thin front-ends over the [`zxcvbn`] estimator: a console report that
//! flags personal words found in the password, and an interactive terminal
//! screen that re-scores the password on every keystroke.
//!
//! # Features
//!
//! - `async`: Enables the channel-based async adapter with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `cli` (default): Command-line front-end and subscriber setup
//! - `gui` (default): Interactive terminal front-end
//!
//! # Environment Variables
//!
//! - `PWD_ANALYZER_LOG`: Log file for the interactive front-end
//! - `RUST_LOG`: Log filter
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_analyzer::{AnalysisRequest, analyze_password, render_report};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Fluffy1990".to_string().into());
//! let request = AnalysisRequest::new(password).with_context_words(["Fluffy", "1990"]);
//!
//! let result = analyze_password(&request).expect("analysis failed");
//! println!("{}", render_report(&request, &result));
//! ```

mod evaluator;
mod presenter;
mod report;
mod sections;
mod strength;
mod types;

#[cfg(feature = "cli")]
pub mod logging;

#[cfg(feature = "gui")]
pub mod gui;

// Public API
pub use evaluator::{AnalysisError, Estimator, ZxcvbnEstimator, analyze_password};
pub use presenter::{
    EMPTY_PROMPT, PLACEHOLDER_MESSAGE, PanelView, Progress, Segment, TextTag, refresh,
};
pub use report::{analyze_and_report, render_report};
pub use strength::{Palette, Score};
pub use types::{
    AnalysisRequest, AnalysisResult, CrackTimeScenario, MatchComponent, MatchOrigin, PatternKind,
};

#[cfg(feature = "async")]
pub use evaluator::analyze_password_tx;
