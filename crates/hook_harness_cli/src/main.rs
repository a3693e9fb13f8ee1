//! HookHarness CLI: register outbound webhooks, trigger them with ad-hoc
//! JSON payloads, and review the invocation history.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use auth_session::{EnvIdentityProvider, IdentityProvider};
use hook_harness_core::{AuditLog, HttpMethod, InvocationEngine, WebhookRegistry};
use record_store::JsonFileStore;

mod commands;
mod errors;

use errors::Error;

/// HookHarness: fire outbound webhooks and observe what happens
#[derive(Parser)]
#[command(name = "hook-harness")]
#[command(about = "Register, trigger, and audit outbound webhooks", long_about = None)]
struct Cli {
    /// Path of the JSON store file
    #[arg(long, default_value = "hook-harness.json", global = true)]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new webhook
    Add {
        /// Display name
        name: String,

        /// Absolute http(s) target URL
        url: String,

        /// HTTP method to invoke with
        #[arg(long, default_value = "POST")]
        method: HttpMethod,
    },

    /// List registered webhooks, newest first
    List,

    /// Delete a webhook by id (its log entries are kept)
    Delete {
        /// Webhook id
        id: String,
    },

    /// Trigger a webhook with a JSON payload
    Trigger {
        /// Webhook id
        id: String,

        /// JSON payload text; omitted means {}
        #[arg(long, default_value = "")]
        data: String,
    },

    /// Show recent invocation log entries
    Logs {
        /// Maximum number of entries
        #[arg(long)]
        limit: Option<usize>,

        /// Only entries for this webhook id
        #[arg(long)]
        webhook: Option<String>,
    },
}

async fn run(cli: Cli) -> Result<(), Error> {
    let provider = EnvIdentityProvider::default();
    let session = provider.session().await?;

    let store = Arc::new(JsonFileStore::open(&cli.store).await?);
    let registry = WebhookRegistry::new(store.clone());
    let audit = AuditLog::new(store.clone());
    let engine = InvocationEngine::new(AuditLog::new(store));

    match &cli.command {
        Commands::Add { name, url, method } => {
            commands::add(&registry, &session, name, url, *method).await
        }
        Commands::List => commands::list(&registry, &session).await,
        Commands::Delete { id } => commands::delete(&registry, &session, id).await,
        Commands::Trigger { id, data } => {
            commands::trigger(&registry, &engine, &session, id, data).await
        }
        Commands::Logs { limit, webhook } => {
            commands::logs(&audit, &session, *limit, webhook.as_deref()).await
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("HOOK_HARNESS_LOG"))
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red());
            ExitCode::FAILURE
        }
    }
}
