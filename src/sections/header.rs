//! Header section - masked password and the context words being checked.

use secrecy::ExposeSecret;

use super::{ReportContext, SectionResult};

const SEPARATOR_WIDTH: usize = 30;

/// Renders the masked password line, the context words (if any) and a
/// separator.
pub fn header_section(ctx: &ReportContext<'_>) -> SectionResult {
    let masked = "*".repeat(ctx.request.password().expose_secret().chars().count());
    let mut out = format!("Analyzing password: '{}'\n", masked);

    let words = ctx.request.context_words();
    if !words.is_empty() {
        let quoted: Vec<String> = words.iter().map(|w| quote_word(w)).collect();
        out.push_str(&format!("Checking against: [{}]\n", quoted.join(", ")));
    }
    out.push_str(&"-".repeat(SEPARATOR_WIDTH));
    Some(out)
}

/// Quotes like a Python string repr: single quotes unless the word holds a
/// single quote and no double quote.
fn quote_word(word: &str) -> String {
    let quote = if word.contains('\'') && !word.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(word.len() + 2);
    out.push(quote);
    for c in word.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
