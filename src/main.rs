//! HTTP server for the Appraisal Engine.

use std::error::Error;
use std::net::SocketAddr;
use std::path::PathBuf;

use appraisal_engine::api::{AppState, create_router};
use appraisal_engine::config::ConfigLoader;
use appraisal_engine::records::{AppraisalStore, RecordSource};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Serves bonus allocation and appraisal endpoints over a record snapshot.
#[derive(Debug, Parser)]
#[command(name = "appraisal-engine", version, about)]
struct Args {
    /// Directory holding scoring.yaml and rating_keys.yaml.
    #[arg(long, default_value = "./config/appraisal")]
    config_dir: PathBuf,

    /// Organization snapshot (YAML or JSON) to serve.
    #[arg(long, default_value = "./fixtures/org_snapshot.yaml")]
    snapshot: PathBuf,

    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0:3000")]
    bind: SocketAddr,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_tracing(log_level: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let config = ConfigLoader::load(&args.config_dir)?;
    let store = AppraisalStore::load(&args.snapshot)?;
    info!(
        config_dir = %args.config_dir.display(),
        snapshot = %args.snapshot.display(),
        rating_keys = config.config().rating_keys().len(),
        active_employees = store.active_employees()?.len(),
        "Loaded configuration and snapshot"
    );

    let app = create_router(AppState::new(config, store));
    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!(address = %args.bind, "Appraisal engine listening");
    axum::serve(listener, app).await?;

    Ok(())
}
