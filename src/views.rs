// 🖼️ View Models - What the bill-list page renders
// Pure data; the anti-chronological sort lives here, not in the loader

use crate::bills::DisplayBill;

// ============================================================================
// ROW + MODAL
// ============================================================================

/// One rendered line of the bill table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillRow {
    pub bill_type: String,
    pub name: String,
    pub date: String,
    pub raw_date: String,
    pub amount: String,
    pub status: String,
    pub file_url: Option<String>,
}

impl From<DisplayBill> for BillRow {
    fn from(bill: DisplayBill) -> Self {
        BillRow {
            bill_type: bill.bill_type,
            name: bill.name,
            date: bill.date,
            raw_date: bill.raw_date,
            amount: format!("{} €", bill.amount),
            status: bill.status,
            file_url: bill.file_url,
        }
    }
}

/// Justificatif preview opened by the eye icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub image_url: String,
}

impl Modal {
    pub fn preview(image_url: String) -> Self {
        Modal { image_url }
    }
}

// ============================================================================
// BILLS PAGE
// ============================================================================

/// BillsPage - Render state of the bill-list page.
///
/// While a fetch is outstanding the page is Loading; a rejected fetch shows
/// the server's message verbatim in the error banner; a resolved one shows
/// the table, most recent bill first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillsPage {
    Loading,
    Error { message: String },
    Ready { rows: Vec<BillRow> },
}

impl BillsPage {
    pub fn loading() -> Self {
        BillsPage::Loading
    }

    pub fn error(message: impl Into<String>) -> Self {
        BillsPage::Error {
            message: message.into(),
        }
    }

    /// Build the table, anti-chronological: sorted by raw date descending.
    pub fn from_bills(mut bills: Vec<DisplayBill>) -> Self {
        bills.sort_by(|a, b| b.raw_date.cmp(&a.raw_date));
        BillsPage::Ready {
            rows: bills.into_iter().map(BillRow::from).collect(),
        }
    }

    pub fn rows(&self) -> &[BillRow] {
        match self {
            BillsPage::Ready { rows } => rows,
            _ => &[],
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixture_bills;

    fn display_bills() -> Vec<DisplayBill> {
        fixture_bills()
            .into_iter()
            .map(DisplayBill::from_raw)
            .collect()
    }

    #[test]
    fn test_bills_ordered_anti_chronologically() {
        let page = BillsPage::from_bills(display_bills());

        let dates: Vec<&str> = page.rows().iter().map(|r| r.raw_date.as_str()).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_most_recent_bill_first() {
        let page = BillsPage::from_bills(display_bills());

        assert_eq!(page.rows()[0].raw_date, "2004-04-04");
        assert_eq!(page.rows()[3].raw_date, "2001-01-01");
    }

    #[test]
    fn test_rows_carry_formatted_fields() {
        let page = BillsPage::from_bills(display_bills());
        let first = &page.rows()[0];

        assert_eq!(first.date, "4 Avr. 04");
        assert_eq!(first.amount, "400 €");
        assert_eq!(first.status, "En attente");
    }

    #[test]
    fn test_error_banner_keeps_server_message() {
        let page = BillsPage::error("Erreur 404");
        assert_eq!(
            page,
            BillsPage::Error {
                message: "Erreur 404".to_string()
            }
        );

        let page = BillsPage::error("Erreur 500");
        assert!(matches!(page, BillsPage::Error { message } if message == "Erreur 500"));
    }

    #[test]
    fn test_loading_and_error_have_no_rows() {
        assert!(BillsPage::loading().rows().is_empty());
        assert!(BillsPage::error("Erreur 500").rows().is_empty());
    }

    #[test]
    fn test_empty_bill_list_renders_empty_table() {
        let page = BillsPage::from_bills(Vec::new());
        assert_eq!(page.rows().len(), 0);
    }
}
