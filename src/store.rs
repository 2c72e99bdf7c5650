// 🗄️ Bill Store - Remote data client seam
// All network I/O lives behind this trait; the core only sees futures

use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;
use uuid::Uuid;

// ============================================================================
// ERRORS
// ============================================================================

/// Failure of a remote store operation.
///
/// The API variant carries the server's human-readable message verbatim
/// ("Erreur 404", "Erreur 500"). Callers surface it unchanged - no retry,
/// no local fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0}")]
    Api(String),
}

// ============================================================================
// WIRE TYPES
// ============================================================================

/// RawBill - An expense entry exactly as the remote client returns it.
/// Immutable once received; normalization happens downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBill {
    pub id: String,

    /// ISO-8601-like date string ("2004-04-04"). Kept raw here; display
    /// formatting is a view concern.
    pub date: String,

    /// Raw status code: "pending", "accepted", "refused", or anything
    /// else the backend decides to emit.
    pub status: String,

    /// Expense category ("Hôtel et logement", "Transports", ...)
    #[serde(rename = "type")]
    pub bill_type: String,

    pub name: String,
    pub amount: i64,

    #[serde(default)]
    pub vat: String,

    #[serde(default = "default_pct")]
    pub pct: u32,

    #[serde(default)]
    pub commentary: String,

    #[serde(default)]
    pub file_url: Option<String>,

    #[serde(default)]
    pub file_name: Option<String>,

    #[serde(default)]
    pub email: String,
}

fn default_pct() -> u32 {
    20
}

/// Receipt returned when a justificatif file is attached to a new bill.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateReceipt {
    pub file_url: String,
    pub key: String,
}

/// Payload for attaching the justificatif file (multipart upload upstream).
#[derive(Debug, Clone)]
pub struct CreatePayload {
    pub file_name: String,
    pub file: Vec<u8>,
    pub email: String,
}

/// Payload for submitting the completed bill form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPayload {
    /// Selector of the bill created at file-attach time.
    #[serde(skip_serializing)]
    pub key: String,

    pub email: String,

    #[serde(rename = "type")]
    pub bill_type: String,

    pub name: String,
    pub amount: i64,
    pub date: String,
    pub vat: String,
    pub pct: u32,
    pub commentary: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub status: String,
}

// ============================================================================
// STORE TRAIT
// ============================================================================

/// BillStore - The data client the bill containers are bound to.
///
/// Mirrors the remote API: `list` fetches every bill visible to the current
/// session, `create` attaches a justificatif and reserves a bill key,
/// `update` submits the completed form.
///
/// Each operation either resolves or rejects; there are no timeouts or
/// retries at this layer.
pub trait BillStore: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<RawBill>, StoreError>> + Send;

    fn create(
        &self,
        payload: CreatePayload,
    ) -> impl Future<Output = Result<CreateReceipt, StoreError>> + Send;

    fn update(
        &self,
        payload: BillPayload,
    ) -> impl Future<Output = Result<RawBill, StoreError>> + Send;
}

// ============================================================================
// MOCK STORE (fixtures for tests and the demo binary)
// ============================================================================

/// In-memory stand-in for the remote API.
///
/// `list` resolves the fixture set, `create` resolves a localhost receipt
/// with a fresh key, `update` echoes the submitted bill back.
#[derive(Debug, Default, Clone)]
pub struct MockStore;

impl MockStore {
    pub fn new() -> Self {
        MockStore
    }
}

impl BillStore for MockStore {
    async fn list(&self) -> Result<Vec<RawBill>, StoreError> {
        Ok(fixture_bills())
    }

    async fn create(&self, _payload: CreatePayload) -> Result<CreateReceipt, StoreError> {
        Ok(CreateReceipt {
            file_url: "https://localhost:3456/images/test.jpg".to_string(),
            key: Uuid::new_v4().to_string(),
        })
    }

    async fn update(&self, payload: BillPayload) -> Result<RawBill, StoreError> {
        Ok(RawBill {
            id: payload.key,
            date: payload.date,
            status: payload.status,
            bill_type: payload.bill_type,
            name: payload.name,
            amount: payload.amount,
            vat: payload.vat,
            pct: payload.pct,
            commentary: payload.commentary,
            file_url: payload.file_url,
            file_name: payload.file_name,
            email: payload.email,
        })
    }
}

/// Four bills with distinct dates and every known status code.
pub fn fixture_bills() -> Vec<RawBill> {
    vec![
        RawBill {
            id: "47qAXb6fIm2zOKkLzMro".to_string(),
            date: "2004-04-04".to_string(),
            status: "pending".to_string(),
            bill_type: "Hôtel et logement".to_string(),
            name: "encore".to_string(),
            amount: 400,
            vat: "80".to_string(),
            pct: 20,
            commentary: "séminaire billed".to_string(),
            file_url: Some("https://localhost:3456/images/justificatif-4.jpg".to_string()),
            file_name: Some("justificatif-4.jpg".to_string()),
            email: "a@a".to_string(),
        },
        RawBill {
            id: "BeKy5Mo4jkmdfPGYpTxZ".to_string(),
            date: "2001-01-01".to_string(),
            status: "refused".to_string(),
            bill_type: "Restaurants et bars".to_string(),
            name: "test1".to_string(),
            amount: 100,
            vat: String::new(),
            pct: 20,
            commentary: "repas d'équipe".to_string(),
            file_url: Some("https://localhost:3456/images/justificatif-1.jpg".to_string()),
            file_name: Some("justificatif-1.jpg".to_string()),
            email: "a@a".to_string(),
        },
        RawBill {
            id: "UIUZtnPQvnbFnB0ozvJh".to_string(),
            date: "2003-03-03".to_string(),
            status: "accepted".to_string(),
            bill_type: "Services en ligne".to_string(),
            name: "test3".to_string(),
            amount: 300,
            vat: "60".to_string(),
            pct: 20,
            commentary: "abonnement annuel".to_string(),
            file_url: Some("https://localhost:3456/images/justificatif-3.jpg".to_string()),
            file_name: Some("justificatif-3.jpg".to_string()),
            email: "a@a".to_string(),
        },
        RawBill {
            id: "qcCK3SzECmaZAGRrHjaC".to_string(),
            date: "2002-02-02".to_string(),
            status: "refused".to_string(),
            bill_type: "Transports".to_string(),
            name: "test2".to_string(),
            amount: 200,
            vat: "40".to_string(),
            pct: 20,
            commentary: String::new(),
            file_url: Some("https://localhost:3456/images/justificatif-2.jpg".to_string()),
            file_name: Some("justificatif-2.jpg".to_string()),
            email: "a@a".to_string(),
        },
    ]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_bills_have_distinct_dates() {
        let bills = fixture_bills();
        assert_eq!(bills.len(), 4);

        let mut dates: Vec<&str> = bills.iter().map(|b| b.date.as_str()).collect();
        dates.sort();
        dates.dedup();
        assert_eq!(dates.len(), 4);
    }

    #[test]
    fn test_store_error_message_is_verbatim() {
        let err = StoreError::Api("Erreur 404".to_string());
        assert_eq!(err.to_string(), "Erreur 404");
    }

    #[test]
    fn test_raw_bill_wire_format() {
        let json = r#"{
            "id": "abc123",
            "date": "2004-04-04",
            "status": "pending",
            "type": "Transports",
            "name": "vol Paris-Londres",
            "amount": 348,
            "vat": "70",
            "pct": 20,
            "commentary": "",
            "fileUrl": "https://localhost:3456/images/justificatif.jpg",
            "fileName": "justificatif.jpg",
            "email": "a@a"
        }"#;

        let bill: RawBill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.bill_type, "Transports");
        assert_eq!(bill.file_name.as_deref(), Some("justificatif.jpg"));
        assert_eq!(bill.amount, 348);
    }

    #[test]
    fn test_raw_bill_missing_optionals_default() {
        // Backend records created before the upload step have no file yet
        let json = r#"{
            "id": "abc123",
            "date": "2004-04-04",
            "status": "pending",
            "type": "Transports",
            "name": "vol",
            "amount": 348
        }"#;

        let bill: RawBill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.file_url, None);
        assert_eq!(bill.pct, 20);
        assert_eq!(bill.email, "");
    }

    #[tokio::test]
    async fn test_mock_store_list_resolves_fixtures() {
        let store = MockStore::new();
        let bills = store.list().await.unwrap();
        assert_eq!(bills.len(), 4);
        assert_eq!(bills[0].name, "encore");
    }

    #[tokio::test]
    async fn test_mock_store_create_resolves_receipt() {
        let store = MockStore::new();
        let receipt = store
            .create(CreatePayload {
                file_name: "photo.png".to_string(),
                file: vec![0xFF, 0xD8],
                email: "a@a".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(receipt.file_url, "https://localhost:3456/images/test.jpg");
        assert!(!receipt.key.is_empty());
    }
}
