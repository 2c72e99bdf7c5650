// 🗓️ Display Formatting - Raw bill fields → presentation strings
// French short date ("4 Avr. 04") and human status labels

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};

// ============================================================================
// DATE FORMATTING
// ============================================================================

/// Three-letter French month abbreviations, indexed by month0.
/// Truncated to three letters, so juin and juillet collapse to "Jui" -
/// that is what the UI has always shown.
const MONTHS_FR: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// Format a raw ISO date ("2004-04-04") as the short French display form
/// ("4 Avr. 04"): day without leading zero, abbreviated month, two-digit year.
///
/// Malformed input is an error; the caller decides whether that fails the
/// whole operation or degrades a single record.
pub fn format_date(raw: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("unparseable bill date: {:?}", raw))?;

    let month = MONTHS_FR[date.month0() as usize];
    Ok(format!(
        "{} {}. {:02}",
        date.day(),
        month,
        date.year().rem_euclid(100)
    ))
}

// ============================================================================
// STATUS LABELS
// ============================================================================

/// BillStatus - Raw backend status code, labelled for display.
/// Codes outside the known set are preserved and passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
    Other(String),
}

impl BillStatus {
    pub fn from_code(code: &str) -> Self {
        match code {
            "pending" => BillStatus::Pending,
            "accepted" => BillStatus::Accepted,
            "refused" => BillStatus::Refused,
            other => BillStatus::Other(other.to_string()),
        }
    }

    /// Human-readable label shown in the bill list.
    pub fn label(&self) -> &str {
        match self {
            BillStatus::Pending => "En attente",
            BillStatus::Accepted => "Accepté",
            BillStatus::Refused => "Refusé",
            BillStatus::Other(code) => code,
        }
    }
}

/// Map a raw status code to its display label in one step.
pub fn format_status(code: &str) -> String {
    BillStatus::from_code(code).label().to_string()
}

// ============================================================================
// TESTS
// ============================================================================
