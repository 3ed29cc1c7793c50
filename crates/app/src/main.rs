use ledger::LedgerStore;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "expense_tracker={level},server={level},ledger={level}",
            level = settings.app.level
        ))
        .init();

    let ledger = LedgerStore::open(&settings.server.ledger)?;
    tracing::info!("Using ledger {}", ledger.path().display());

    let addr = format!("{}:{}", settings.server.bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|err| {
        tracing::error!("failed to bind server listener on {addr}: {err}");
        err
    })?;

    server::run_with_listener(ledger, listener).await?;
    Ok(())
}
