pub mod routes;

pub use routes::app_router;

use crate::utils::error::Result;

/// Bind and serve the HTTP API until the process is stopped.
pub async fn serve(port: u16) -> Result<()> {
    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("collatz-lab server listening on {}", bind_addr);
    tracing::info!("  GET /health  — liveness probe");
    tracing::info!("  GET /collatz — ?number=<positive integer>");

    axum::serve(listener, app_router()).await?;
    Ok(())
}
