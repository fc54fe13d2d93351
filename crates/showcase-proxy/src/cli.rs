//! CLI module for showcase-proxy.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use crate::config::{load_config, ProxyConfig};
use crate::{router, AppState};

/// Showcase proxy CLI arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "showcase-proxy", version, about = "Credential proxy for the Showcase site")]
pub struct ProxyArgs {
    /// Config file path (toml). Defaults apply when omitted.
    #[arg(short, long, env = "SHOWCASE_PROXY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override listen address.
    #[arg(short, long)]
    pub listen: Option<String>,

    /// Serve the built site from this directory.
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// Log level override (RUST_LOG syntax).
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Resolve the final config: file, then environment, then CLI flags.
pub fn resolve_config(args: &ProxyArgs) -> Result<ProxyConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ProxyConfig::default(),
    };

    config.apply_env_overrides(|key| std::env::var(key).ok());

    if let Some(listen) = &args.listen {
        config.listen = listen.clone();
    }
    if let Some(dir) = &args.static_dir {
        config.static_dir = Some(dir.clone());
    }

    config.validate()?;
    Ok(config)
}

/// Run the proxy with the given CLI arguments.
pub async fn run(args: ProxyArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log_level.as_deref());

    let config = resolve_config(&args)?;
    log::debug!("Config: {:?}", config);

    let state = Arc::new(AppState::new(config)?);
    let listener = TcpListener::bind(&state.config.listen).await?;
    log::info!("Listening on http://{}", listener.local_addr()?);
    if let Some(dir) = &state.config.static_dir {
        log::info!("Serving static files from {}", dir.display());
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::info!("Shut down");
    Ok(())
}

fn init_logging(level: Option<&str>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = level {
        builder.parse_filters(level);
    }
    // A second init (tests) is harmless.
    let _ = builder.try_init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
