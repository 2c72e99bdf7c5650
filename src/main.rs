use anyhow::Result;

use expense_bills::session::KeyValueStore;
use expense_bills::{Bills, BillsPage, MemoryStore, MockStore, RoutePath, Session, USER_KEY};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("🧾 Expense Bills - demo run against the mock store");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // Session would come from the login flow; seed it the same way here
    let mut kv = MemoryStore::new();
    kv.set_item(
        USER_KEY,
        r#"{"type": "Employee", "email": "employee@test.tld"}"#.to_string(),
    );
    let session = Session::from_store(&kv)?;
    println!("\n👤 Connected as {}", session.email);

    let page = Bills::new(MockStore::new(), session, |path: RoutePath| {
        println!("→ navigate: {}", path.path());
    });

    // Fetch + normalize
    println!("\n📂 Fetching bills...");
    let bills = page.get_bills().await?;
    println!("✓ Loaded {} bills", bills.len());

    // Render, most recent first
    let page = BillsPage::from_bills(bills);
    println!(
        "\n{:<22} {:<12} {:<12} {:>8}  {}",
        "Type", "Nom", "Date", "Montant", "Statut"
    );
    for row in page.rows() {
        println!(
            "{:<22} {:<12} {:<12} {:>8}  {}",
            row.bill_type, row.name, row.date, row.amount, row.status
        );
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✅ Done");

    Ok(())
}
