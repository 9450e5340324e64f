//! Serve command implementation.

use anyhow::{Context, Result};
use kursd_server::{Config, app_router, build_state, init_tracing};

/// Run the HTTP API server until the process is stopped.
pub(crate) async fn serve(listen: Option<&str>) -> Result<()> {
    init_tracing();

    let mut config = Config::from_env();
    if let Some(listen) = listen {
        config.listen_addr = listen
            .parse()
            .with_context(|| format!("Invalid listen address: {listen}"))?;
    }

    let addr = config.listen_addr;
    let state = build_state(config)?;

    tracing::info!("Listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app_router(state)).await?;

    Ok(())
}
