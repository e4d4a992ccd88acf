//! Components section - per-match breakdown, personal words flagged first.

use crate::types::{MatchComponent, MatchOrigin};

use super::{ReportContext, SectionResult};

pub fn components_section(ctx: &ReportContext<'_>) -> SectionResult {
    if ctx.result.sequence.is_empty() {
        return None;
    }
    let mut out = String::from("\nAnalysis of Password Components:");
    for component in &ctx.result.sequence {
        out.push('\n');
        out.push_str(&render_component(component));
    }
    Some(out)
}

/// Only the last two characters of a token are shown.
fn masked_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let tail: String = chars[chars.len().saturating_sub(2)..].iter().collect();
    format!("'...{}'", tail)
}

fn render_component(component: &MatchComponent) -> String {
    let header = format!("  - Component: {}", masked_token(&component.token));
    let pattern = component.pattern;
    match &component.origin {
        MatchOrigin::PersonalInput => format!(
            "{}\n    - 🚨 Type: Personal Information ({})\n    - Matched: '{}'",
            header,
            pattern,
            component.matched_word.as_deref().unwrap_or_default()
        ),
        MatchOrigin::Dictionary(name) => {
            format!("{}\n    - Type: {} ({})", header, pattern, name)
        }
        MatchOrigin::Regex(name) => {
            format!("{}\n    - Type: {} (pattern: {})", header, pattern, name)
        }
        MatchOrigin::Other => format!("{}\n    - Type: {}", header, pattern),
    }
}
