use anyhow::{Context, Result};
use call_intake::config::DEFAULT_CONFIG_PATH;
use call_intake::telephony::TwilioCredentials;
use call_intake::{
    create_router, spawn_idle_sweeper, AppState, Config, OutboundSettings, RecordLog,
    SessionStore, TurnEngine, TwilioClient,
};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Phone intake agent: answers calls, asks the intake questions, stores the answers
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Config file (extension optional)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Override the listening port
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the bind address
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));

    let records = Arc::new(RecordLog::open(&cfg.storage.log_path).await);
    let sessions = Arc::new(SessionStore::new());
    let engine = Arc::new(TurnEngine::new(Arc::clone(&sessions), records.clone()));

    let originator = Arc::new(
        TwilioClient::new(
            cfg.telephony.api_base.clone(),
            TwilioCredentials {
                account_sid: cfg.telephony.account_sid.clone(),
                auth_token: cfg.telephony.auth_token.clone(),
            },
        )
        .context("Failed to create telephony client")?,
    );

    let outbound = OutboundSettings {
        base_url: cfg.callback.base_url.clone(),
        from_number: cfg.telephony.from_number.clone(),
        default_to_number: cfg.telephony.default_to_number.clone(),
    };

    let _sweeper = spawn_idle_sweeper(
        Arc::clone(&sessions),
        cfg.sessions.idle_ttl(),
        cfg.sessions.sweep_interval(),
    );

    let state = AppState::new(engine, records, originator, outbound, &cfg.web.public_dir);
    let app = create_router(state);

    let bind = args.bind.unwrap_or(cfg.service.http.bind);
    let port = args.port.unwrap_or(cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind((bind.as_str(), port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", bind, port))?;

    info!("Call intake server listening on {}:{}", bind, port);
    info!("Voice webhook: {}/voice", cfg.callback.base_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
