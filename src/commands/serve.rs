use anyhow::{Context, Result};
use std::net::SocketAddr;

use filmdiary::config::Config;
use filmdiary::server::DiaryServer;
use filmdiary::service::DiaryService;

/// Serve `GET /api/diary/{username}` until Ctrl+C
pub async fn serve(config: &Config) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| {
            format!(
                "Invalid bind address {}:{}",
                config.server.host, config.server.port
            )
        })?;

    let service = DiaryService::from_config(config).context("Failed to build diary service")?;
    let server = DiaryServer::new(addr, service);

    println!("Diary server listening on http://{addr}");
    println!("  GET /api/diary/{{username}}");
    println!("  GET /health");

    server
        .start_with_shutdown(shutdown_signal())
        .await
        .context("Diary server failed")?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    }
}
