use std::path::PathBuf;

use anyhow::Context;
use formledger::config::{logging::init_tracing, Config};
use formledger::forms::{submit_draft, FormDraft};
use formledger::notifications::LogNotifier;

/// Replay a form draft and submit it through the log notifier.
///
/// Usage: `formledger [DRAFT.json]` (reads stdin when no path is given)
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    init_tracing(&config.app);

    tracing::info!("Environment: {}", config.app.env);
    tracing::info!(
        currency = %config.ledger.currency,
        default_tax_rate = %config.ledger.default_tax_rate,
        "Ledger settings loaded"
    );

    let path = std::env::args().nth(1).map(PathBuf::from);
    let draft = FormDraft::read(path.as_deref()).with_context(|| match &path {
        Some(path) => format!("Failed to read draft from {}", path.display()),
        None => "Failed to read draft from stdin".to_string(),
    })?;
    let outcome = submit_draft(
        &draft,
        config.ledger_settings(),
        config.ledger.currency,
        &LogNotifier::new(),
    )
    .await?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
