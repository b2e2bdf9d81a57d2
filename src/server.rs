//! HTTP server initialization and runtime setup.
//!
//! Builds the API client, spawns the session sweeper, and runs the Axum
//! server until Ctrl+C or SIGTERM.

use crate::application::services::run_session_sweeper;
use crate::config::Config;
use crate::infrastructure::api_client::HttpSiteApi;
use crate::routes::app_router;
use crate::state::{AppState, WebSettings};

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Profile API client
/// - Background idle-session sweeper
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The API client can't be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let api = HttpSiteApi::new(&config.api_base, config.api_timeout())?;
    tracing::info!("API client ready");

    let state = AppState::new(
        Arc::new(api),
        WebSettings {
            login_url: config.login_url.clone(),
            secure_cookies: config.secure_cookies,
        },
    );

    tokio::spawn(run_session_sweeper(
        state.editor_service.clone(),
        config.session_ttl(),
    ));
    tracing::info!("Session sweeper started");

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
