// Expense Bills - Core Library
// Exposes all modules for use in the demo binary and tests

pub mod store;
pub mod format;
pub mod bills;
pub mod upload;
pub mod new_bill;
pub mod views;
pub mod session;
pub mod routes;

// Re-export commonly used types
pub use store::{
    BillStore, StoreError,
    RawBill, BillPayload, CreatePayload, CreateReceipt,
    MockStore, fixture_bills,
};
pub use format::{BillStatus, format_date, format_status};
pub use bills::{Bills, DisplayBill};
pub use upload::{
    UploadGate, UploadDecision, SelectedFile,
    ALLOWED_EXTENSIONS, REJECTION_NOTICE,
};
pub use new_bill::{
    NewBill, NewBillForm, FileChangeEvent, FileChangeOutcome, DEFAULT_PCT,
};
pub use views::{BillsPage, BillRow, Modal};
pub use session::{KeyValueStore, MemoryStore, Session, UserType, USER_KEY};
pub use routes::RoutePath;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
