//! Demo of withdrawals, transfers and alerts against a running server.
//!
//! Run with: cargo run -p moneybox-app --example demo_flow

use std::io::Write;
use std::net::SocketAddr;

use moneybox_client::MoneyboxClient;
use moneybox_hex::{MoneyboxService, inbound::HttpServer};
use moneybox_repo::{NotificationWorker, QueuedNotifier, build_repo};
use moneybox_types::{AccountId, PayInLimit};
use rust_decimal_macros::dec;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    let alice = AccountId::new();
    let bob = AccountId::new();

    // Accounts are provisioned elsewhere; seed two of them from a fixture
    let mut seed = tempfile::NamedTempFile::new()?;
    let fixture = serde_json::json!([
        {
            "id": alice,
            "owner": {
                "id": "0b7e4f0c-8f43-4f7e-a3a4-8a3f5f2b6c01",
                "name": "Alice",
                "email": "alice@example.com"
            },
            "balance": "700.00",
            "paid_in": "700.00"
        },
        {
            "id": bob,
            "owner": {
                "id": "5d0c9a51-2c1e-4d3b-9a0e-7c6f4b8e9d02",
                "name": "Bob",
                "email": "bob@example.com"
            },
            "balance": "20.00",
            "paid_in": "3600.00"
        }
    ]);
    write!(seed, "{fixture}")?;

    let repo = build_repo(PayInLimit::default(), Some(seed.path())).await?;
    let (notifier, alerts) = QueuedNotifier::channel();
    tokio::spawn(NotificationWorker::new(alerts, None)?.run());

    let service = MoneyboxService::new(repo, notifier);
    let router = HttpServer::new(service).router();

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move { axum::serve(listener, router).await });

    println!("🚀 Server running on {addr}");

    let client = MoneyboxClient::new(format!("http://{addr}"));

    let health = client.health().await?;
    println!("✅ Server health: {health}");

    // Stays well above the low-funds threshold
    let account = client.withdraw(alice, dec!(10)).await?;
    println!("✅ Alice withdrew 10, balance {}", account.balance);

    // Bob is close to his pay-in limit: this raises an alert
    let transfer = client.transfer(alice, bob, dec!(10)).await?;
    println!(
        "✅ Alice -> Bob 10: Alice {} / Bob {} (paid in {})",
        transfer.from.balance, transfer.to.balance, transfer.to.paid_in
    );

    // Over the pay-in limit: rejected, nothing persisted
    match client.transfer(alice, bob, dec!(500)).await {
        Ok(_) => println!("❌ Transfer over the pay-in limit went through"),
        Err(e) => println!("✅ Transfer over the pay-in limit rejected: {e}"),
    }

    // More than Alice has
    match client.withdraw(alice, dec!(10000)).await {
        Ok(_) => println!("❌ Overdraft went through"),
        Err(e) => println!("✅ Overdraft rejected: {e}"),
    }

    let alice_account = client.get_account(alice).await?;
    let bob_account = client.get_account(bob).await?;
    println!("\n📋 Final state:");
    for acc in [alice_account, bob_account] {
        println!(
            "   - {} ({}): balance {}, withdrawn {}, paid in {}",
            acc.owner_email, acc.id, acc.balance, acc.withdrawn, acc.paid_in
        );
    }

    println!("\n🎉 Demo completed successfully!");

    Ok(())
}
