//! Moneybox CLI
//!
//! Command-line interface for the moneybox API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use moneybox_client::MoneyboxClient;
use moneybox_repo::security::{SIGNATURE_HEADER, verify_signature};
use moneybox_types::AccountId;

#[derive(Parser)]
#[command(name = "moneybox")]
#[command(author, version, about = "Moneybox API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the moneybox API
    #[arg(
        long,
        env = "MONEYBOX_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Account operations
    Account {
        #[command(subcommand)]
        action: AccountCommands,
    },
    /// Withdraw money from an account
    Withdraw {
        #[arg(long)]
        account: String,
        #[arg(long)]
        amount: Decimal,
    },
    /// Transfer money between accounts
    Transfer {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        amount: Decimal,
    },
    /// Alert operations
    Alerts {
        #[command(subcommand)]
        action: AlertCommands,
    },
    /// Check API health
    Health,
}

#[derive(Subcommand)]
enum AccountCommands {
    /// Get account details
    Get {
        /// Account ID (UUID)
        id: String,
    },
}

#[derive(Subcommand)]
enum AlertCommands {
    /// Start a local listener for alert webhooks
    Listen {
        /// Port to listen on
        #[arg(long, default_value = "9000")]
        port: u16,
        /// Shared secret the server signs alerts with; unsigned or
        /// mis-signed alerts are rejected when set
        #[arg(long, env = "MONEYBOX_NOTIFY_WEBHOOK_SECRET")]
        secret: Option<String>,
    },
}

fn parse_account_id(s: &str) -> Result<AccountId> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Invalid account ID: {}", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = MoneyboxClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Account { action } => match action {
            AccountCommands::Get { id } => {
                let account_id = parse_account_id(&id)?;
                let account = client.get_account(account_id).await?;
                println!("{}", serde_json::to_string_pretty(&account)?);
            }
        },

        Commands::Withdraw { account, amount } => {
            let account_id = parse_account_id(&account)?;
            let account = client.withdraw(account_id, amount).await?;
            println!("{}", serde_json::to_string_pretty(&account)?);
        }

        Commands::Transfer { from, to, amount } => {
            let from_id = parse_account_id(&from)?;
            let to_id = parse_account_id(&to)?;
            let outcome = client.transfer(from_id, to_id, amount).await?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }

        Commands::Alerts { action } => match action {
            AlertCommands::Listen { port, secret } => {
                let app = axum::Router::new()
                    .route("/alerts", axum::routing::post(handle_alert))
                    .with_state(secret);
                let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));
                println!("Listening for alerts on http://{}/alerts", addr);
                let listener = tokio::net::TcpListener::bind(&addr).await?;
                axum::serve(listener, app).await?;
            }
        },
    }

    Ok(())
}

async fn handle_alert(
    axum::extract::State(secret): axum::extract::State<Option<String>>,
    headers: axum::http::HeaderMap,
    body: String,
) -> impl axum::response::IntoResponse {
    let rejected = secret
        .as_deref()
        .is_some_and(|secret| !is_signed(&headers, &body, secret));
    if rejected {
        println!("✗ Rejected alert with missing or invalid {}", SIGNATURE_HEADER);
        println!("----------------------------------------");
        return axum::http::StatusCode::UNAUTHORIZED;
    }

    println!("POST /alerts HTTP/1.1");
    for (name, value) in &headers {
        println!("{}: {:?}", name, value);
    }
    println!();
    println!("{}", body);
    println!("----------------------------------------");
    axum::http::StatusCode::OK
}

fn is_signed(headers: &axum::http::HeaderMap, body: &str, secret: &str) -> bool {
    headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|signature| verify_signature(body.as_bytes(), signature, secret))
}
