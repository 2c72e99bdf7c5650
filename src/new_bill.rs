// 🧾 NewBill Container - Justificatif upload + form submission
// Upload rejection is a value; store failures are real errors

use crate::routes::RoutePath;
use crate::session::Session;
use crate::store::{BillPayload, BillStore, CreatePayload};
use crate::upload::{SelectedFile, UploadDecision, UploadGate};
use anyhow::Result;
use tracing::info;

/// Reimbursement percentage applied when the form leaves it blank.
pub const DEFAULT_PCT: u32 = 20;

// ============================================================================
// EVENT PAYLOADS
// ============================================================================

/// File-input change: the picked file, independent of any UI runtime.
#[derive(Debug, Clone)]
pub struct FileChangeEvent {
    pub file_name: String,
    pub content: Vec<u8>,
}

/// Outcome of a file-input change.
///
/// Rejection is not an error: the selection has been cleared and the fixed
/// notice must be surfaced to the user, nothing more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChangeOutcome {
    Accepted { file_url: String },
    Rejected { notice: &'static str },
}

/// The filled-in form at submit time.
#[derive(Debug, Clone)]
pub struct NewBillForm {
    pub expense_type: String,
    pub expense_name: String,
    pub amount: i64,
    pub date: String,
    pub vat: String,
    pub pct: Option<u32>,
    pub commentary: String,
}

// ============================================================================
// NEW BILL CONTAINER
// ============================================================================

/// NewBill - The new-bill page container.
///
/// Owns the upload gate; the justificatif is attached as soon as a valid
/// file is picked, the bill itself is completed at submit time.
pub struct NewBill<S, N> {
    store: S,
    session: Session,
    on_navigate: N,
    gate: UploadGate,
    file_url: Option<String>,
    bill_key: Option<String>,
}

impl<S, N> NewBill<S, N>
where
    S: BillStore,
    N: FnMut(RoutePath),
{
    pub fn new(store: S, session: Session, on_navigate: N) -> Self {
        NewBill {
            store,
            session,
            on_navigate,
            gate: UploadGate::new(),
            file_url: None,
            bill_key: None,
        }
    }

    pub fn file_url(&self) -> Option<&str> {
        self.file_url.as_deref()
    }

    /// The file input changed: gate the selection, and when it passes,
    /// attach the justificatif right away.
    ///
    /// A store rejection here propagates verbatim (error banner upstream);
    /// a gate rejection comes back as an outcome with the fixed notice.
    pub async fn handle_file_change(&mut self, event: FileChangeEvent) -> Result<FileChangeOutcome> {
        let file = SelectedFile {
            name: event.file_name,
            content: event.content,
        };
        let file_name = file.name.clone();
        let content = file.content.clone();

        if let UploadDecision::Rejected { notice } = self.gate.offer(file) {
            self.file_url = None;
            self.bill_key = None;
            return Ok(FileChangeOutcome::Rejected { notice });
        }

        let receipt = self
            .store
            .create(CreatePayload {
                file_name,
                file: content,
                email: self.session.email.clone(),
            })
            .await?;

        info!(key = %receipt.key, "justificatif attached");
        self.file_url = Some(receipt.file_url.clone());
        self.bill_key = Some(receipt.key);

        Ok(FileChangeOutcome::Accepted {
            file_url: receipt.file_url,
        })
    }

    /// Form submitted: complete the bill (status "pending") and move to the
    /// bill list. The navigation callback fires once, after the store
    /// accepts the update.
    pub async fn handle_submit(&mut self, form: NewBillForm) -> Result<()> {
        let bill = BillPayload {
            key: self.bill_key.clone().unwrap_or_default(),
            email: self.session.email.clone(),
            bill_type: form.expense_type,
            name: form.expense_name,
            amount: form.amount,
            date: form.date,
            vat: form.vat,
            pct: form.pct.unwrap_or(DEFAULT_PCT),
            commentary: form.commentary,
            file_url: self.file_url.clone(),
            file_name: self.gate.selection().map(|f| f.name.clone()),
            status: "pending".to_string(),
        };

        self.store.update(bill).await?;
        (self.on_navigate)(RoutePath::Bills);

        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
