//! Human-readable status lines for update outcomes, one per request,
//! in the shape session logs have always used.

use wd_core::{UpdateOutcome, UpdateStatus};

pub fn outcome_line(outcome: &UpdateOutcome) -> String {
    match &outcome.status {
        UpdateStatus::Applied => format!(
            " [SUCCESS] {}: {} -> {} ({})",
            outcome.symbol,
            outcome.old_token.as_deref().unwrap_or("?"),
            outcome.new_token.as_deref().unwrap_or("?"),
            outcome.request.mode.as_str()
        ),
        UpdateStatus::SkippedUnmapped => format!(
            " [SKIP] Parameter '{}' not found in mapping.",
            outcome.symbol
        ),
        UpdateStatus::ErrorParse(_) => {
            let line = outcome
                .location
                .map(|loc| loc.line.to_string())
                .unwrap_or_else(|| "?".to_owned());
            format!(" [ERROR] Could not parse line {line} for {}", outcome.symbol)
        }
    }
}
