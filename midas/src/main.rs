#![recursion_limit = "256"]

mod config;
mod leptos;
mod web;
mod web_metrics;

use anyhow::Result;
use ::leptos::config::get_configuration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::web::WebState;

async fn shutdown_on_ctrl_c(token: CancellationToken) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down"),
        Err(e) => error!("Unable to listen for shutdown signal {e}"),
    }
    token.cancel();
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::from_env();
    let leptos_options = get_configuration(None)?.leptos_options;
    let token = CancellationToken::new();
    tokio::spawn(shutdown_on_ctrl_c(token.clone()));

    let metrics = {
        let token = token.clone();
        async move {
            match config.metrics_addr {
                Some(addr) => web_metrics::start_metrics_server(addr, token).await,
                None => {
                    info!("metrics disabled");
                    Ok(())
                }
            }
        }
    };
    let web_state = WebState {
        leptos_options,
        token,
    };
    let (web, metrics) = futures::future::join(web::start_web(web_state), metrics).await;
    if let Err(e) = metrics {
        error!("metrics server failed {e:?}");
    }
    web
}
