//! Formatting utilities for terminal output

use crate::solver::SelectionRule;

/// Short description of the rule behind a suggestion
#[must_use]
pub const fn rule_label(rule: SelectionRule) -> &'static str {
    match rule {
        SelectionRule::Opener => "opening guess",
        SelectionRule::Certain => "only candidate left",
        SelectionRule::Restricted => "best remaining candidate",
        SelectionRule::FullSearch => "maximum entropy",
    }
}

/// "1 guess", "4 guesses"
#[must_use]
pub fn guess_count(n: usize) -> String {
    if n == 1 {
        "1 guess".to_string()
    } else {
        format!("{n} guesses")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: values are clamped to [0, width]
        ((value / max) * width as f64).clamp(0.0, width as f64) as usize
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to `max_entropy` bits
#[must_use]
pub fn entropy_bar(entropy: f64, max_entropy: f64, width: usize) -> String {
    create_progress_bar(entropy, max_entropy, width)
}

/// Histogram bar for `count` out of a largest bucket of `max`
///
/// Any non-zero count gets at least one block.
#[must_use]
pub fn histogram_bar(count: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (count * width / max).max(usize::from(count > 0)).min(width)
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
