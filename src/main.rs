//! IR Bank console client entry point.
//!
//! One-shot session overview:
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │  Config  │───▶│ Session  │───▶│  Flags   │───▶│ Accounts │
//! │  (YAML)  │    │  (file)  │    │ (policy) │    │  (REST)  │
//! └──────────┘    └──────────┘    └──────────┘    └──────────┘
//! ```
//!
//! Reads the stored session, resolves permissions into feature flags, then
//! prints the account overview the session is allowed to see.

use anyhow::{Context, Result};

use irbank_client::accounts::{AccountLookup, HttpAccountService};
use irbank_client::client::ApiClient;
use irbank_client::config::AppConfig;
use irbank_client::logging::init_logging;
use irbank_client::session::{FileSessionStore, SessionProvider};
use irbank_client::{money, policy, roles};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let env = std::env::args().nth(1).unwrap_or_else(|| "dev".to_string());
    let config = AppConfig::load(&env);
    let _guard = init_logging(&config);

    let store = FileSessionStore::new(&config.session.file);
    let Some(session) = store.current_session() else {
        println!("Not signed in. Put a session blob at {}", config.session.file);
        return Ok(());
    };

    let permissions = roles::resolve(&session.raw_roles);
    let flags = policy::derive_flags(&permissions, &session.username);
    info!(username = %session.username, ?flags, "Session resolved");

    println!("Signed in as {}", session.username);
    println!(
        "  client: {}  teller: {}  teller (read-only): {}",
        flags.is_client, flags.is_teller, flags.is_teller_read_only
    );

    let api = ApiClient::new(&config.api)
        .context("Failed to build HTTP client")?
        .with_token(session.token.clone());
    let lookup = AccountLookup::new(Arc::new(HttpAccountService::new(api)), flags);

    let accounts = lookup
        .list_all()
        .await
        .context("Failed to load accounts")?;

    if accounts.is_empty() {
        println!("No accounts found");
        return Ok(());
    }

    println!("\n{} account(s):", accounts.len());
    for account in &accounts {
        let owner = if lookup.show_owner_column() {
            format!("  {}", account.owner_name().unwrap_or("N/A"))
        } else {
            String::new()
        };
        println!(
            "  {}  {}  {}{}",
            account.identifier,
            account.account_type,
            money::format_eur(account.balance),
            owner
        );
    }

    Ok(())
}
