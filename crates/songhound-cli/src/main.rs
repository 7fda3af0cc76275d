// SPDX-License-Identifier: GPL-3.0-or-later
use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::serve;
use songhound_api::router;
use songhound_application::AppState;
use songhound_config::{load as load_config, HttpConfig, TelemetryConfig};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::var_os("SONGHOUND_CONFIG").map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;
    init_tracing(&config.telemetry);

    let state = AppState::new(config.clone()).context("failed to configure Genius client")?;
    state.on_start();

    let listener = TcpListener::bind(bind_addr(&config.http)?).await?;
    let addr = listener.local_addr()?;
    info!(target: "cli", "listening on {}", addr);

    serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(telemetry: &TelemetryConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&telemetry.log_level));
    let registry = tracing_subscriber::registry().with(env_filter);

    if telemetry.json {
        registry
            .with(fmt::layer().json().with_target(true).with_level(true))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_names(true)
                    .with_level(true),
            )
            .init();
    }
}

fn bind_addr(http: &HttpConfig) -> Result<SocketAddr> {
    let addr = format!("{}:{}", http.host, http.port);
    addr.parse()
        .with_context(|| format!("invalid listen address {}", addr))
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match (
            signal(SignalKind::interrupt()),
            signal(SignalKind::terminate()),
        ) {
            (Ok(mut interrupt), Ok(mut terminate)) => {
                tokio::select! {
                    _ = interrupt.recv() => {},
                    _ = terminate.recv() => {},
                }
            }
            _ => {
                warn!(target: "cli", "failed to install signal handlers, falling back to ctrl-c");
                wait_for_ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        wait_for_ctrl_c().await;
    }

    info!(target: "cli", "shutdown signal received");
}

async fn wait_for_ctrl_c() {
    ctrl_c_received(tokio::signal::ctrl_c().await).await;
}

/// Resolves only for a real ctrl-c; a listener error must not stop the server.
async fn ctrl_c_received(result: io::Result<()>) {
    if let Err(error) = result {
        warn!(target: "cli", %error, "failed to listen for ctrl-c, serving until killed");
        std::future::pending::<()>().await;
    }
}
