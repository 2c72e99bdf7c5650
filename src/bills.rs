// 📋 Bills Container - Fetch bills and normalize them for display
// Bound to a store, a session, and a navigation callback at construction

use crate::format::{format_date, format_status};
use crate::routes::RoutePath;
use crate::session::Session;
use crate::store::{BillStore, RawBill};
use crate::views::Modal;
use anyhow::Result;
use serde::Serialize;
use tracing::{info, warn};

// ============================================================================
// DISPLAY RECORD
// ============================================================================

/// DisplayBill - A RawBill augmented with presentation-ready fields.
///
/// Transient view value: derived 1:1 from exactly one RawBill and discarded
/// after render. `raw_date` keeps the original string so the view can sort
/// without re-parsing the formatted form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayBill {
    pub id: String,
    pub raw_date: String,

    /// Locale-formatted date ("4 Avr. 04"), or the raw string when the
    /// source date would not parse.
    pub date: String,

    /// Human status label ("En attente", "Accepté", "Refusé").
    pub status: String,

    pub bill_type: String,
    pub name: String,
    pub amount: i64,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub email: String,
}

impl DisplayBill {
    /// Derive the display record from a raw one.
    ///
    /// A malformed date degrades that single record (raw string kept as the
    /// display date) instead of dropping it or failing the batch; the status
    /// mapping is applied regardless.
    pub fn from_raw(raw: RawBill) -> Self {
        let date = match format_date(&raw.date) {
            Ok(formatted) => formatted,
            Err(err) => {
                warn!(date = %raw.date, bill = %raw.id, "keeping raw date: {err}");
                raw.date.clone()
            }
        };

        DisplayBill {
            id: raw.id,
            raw_date: raw.date,
            date,
            status: format_status(&raw.status),
            bill_type: raw.bill_type,
            name: raw.name,
            amount: raw.amount,
            file_url: raw.file_url,
            file_name: raw.file_name,
            email: raw.email,
        }
    }
}

// ============================================================================
// BILLS CONTAINER
// ============================================================================

/// Bills - The bill-list page container.
pub struct Bills<S, N> {
    store: S,
    session: Session,
    on_navigate: N,
}

impl<S, N> Bills<S, N>
where
    S: BillStore,
    N: FnMut(RoutePath),
{
    pub fn new(store: S, session: Session, on_navigate: N) -> Self {
        Bills {
            store,
            session,
            on_navigate,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Fetch the bills visible to the current session, in the order the
    /// store emits them (sorting is the view's concern).
    ///
    /// A store rejection propagates verbatim - no retry, no fallback.
    pub async fn get_bills(&self) -> Result<Vec<DisplayBill>> {
        let raw = self.store.list().await?;
        info!(count = raw.len(), "bills fetched");

        Ok(raw.into_iter().map(DisplayBill::from_raw).collect())
    }

    /// "Nouvelle note de frais" button.
    pub fn handle_click_new_bill(&mut self) {
        (self.on_navigate)(RoutePath::NewBill);
    }

    /// Eye icon on a row: open the justificatif preview, if the bill
    /// carries a file.
    pub fn handle_click_icon_eye(&self, bill: &DisplayBill) -> Option<Modal> {
        bill.file_url.clone().map(Modal::preview)
    }
}

// ============================================================================
// TESTS
// ============================================================================
