use chrono::NaiveDate;
use colored::{ColoredString, Colorize};
use std::fmt::Write;

use crate::domain::{AnnotatedMatch, DifferentialTier};

const EMPTY_DIGEST: &str = "🎾 No matches found for today";

fn tier_icon(tier: DifferentialTier) -> &'static str {
    match tier {
        DifferentialTier::High => "🔥",
        DifferentialTier::MediumHigh => "⚡",
        DifferentialTier::Medium => "⚖️",
        DifferentialTier::Low => "🤝",
    }
}

fn tier_label(tier: DifferentialTier) -> ColoredString {
    match tier {
        DifferentialTier::High => tier.as_str().red().bold(),
        DifferentialTier::MediumHigh => tier.as_str().yellow(),
        DifferentialTier::Medium => tier.as_str().cyan(),
        DifferentialTier::Low => tier.as_str().dimmed(),
    }
}

/// Backslash-escape the characters that open an entity in legacy Markdown
fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '_' | '*' | '`' | '[') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Markdown digest for the chat endpoint, one block per match in ranked order
pub fn format_chat_digest(matches: &[AnnotatedMatch], date: NaiveDate) -> String {
    if matches.is_empty() {
        return EMPTY_DIGEST.to_string();
    }

    let mut message = String::new();
    let _ = writeln!(message, "🎾 *TENNIS MATCHES {}*", date.format("%d/%m/%Y"));
    let _ = writeln!(message, "📊 Ranked by rating gap (largest first)\n");

    for (i, m) in matches.iter().enumerate() {
        let ((favourite, favourite_rating), (underdog, underdog_rating)) = m.favourite_first();

        let _ = writeln!(message, "{} *Match {}* ({})", tier_icon(m.tier()), i + 1, m.tour);
        let _ = writeln!(message, "🏆 {} ({:.0})", escape_markdown(favourite), favourite_rating);
        let _ = writeln!(message, "🆚 {} ({:.0})", escape_markdown(underdog), underdog_rating);
        let _ = writeln!(message, "🎯 Surface: {}", m.surface.title());
        let _ = writeln!(message, "📈 Rating gap: *{:.0}*", m.differential);
        let _ = writeln!(message, "🏟️ {}\n", escape_markdown(&m.tournament));
    }

    message
}

/// Plain listing for the terminal with the tier tinted
pub fn format_terminal_digest(matches: &[AnnotatedMatch], date: NaiveDate) -> String {
    if matches.is_empty() {
        return EMPTY_DIGEST.to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", format!("Tennis matches {}", date.format("%Y-%m-%d")).as_str().bold());

    for (i, m) in matches.iter().enumerate() {
        let ((favourite, favourite_rating), (underdog, underdog_rating)) = m.favourite_first();
        let _ = writeln!(
            out,
            "{:>3}. [{}] {:>4.0} {:<11} {} ({:.0}) vs {} ({:.0}) | {} | {}",
            i + 1,
            m.tour,
            m.differential,
            tier_label(m.tier()),
            favourite,
            favourite_rating,
            underdog,
            underdog_rating,
            m.surface,
            m.tournament
        );
    }

    out
}
