//! HTTP front end for the diary service
//!
//! Serves the JSON diary endpoint consumed by the visualization client.

pub mod api;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::crawler::{DiaryFetcher, PageFetcher};
use crate::error::{Error, Result};
use crate::service::DiaryService;

pub use api::create_router;

/// Shared application state
pub struct AppState<F = DiaryFetcher> {
    pub service: Arc<DiaryService<F>>,
    pub start_time: Instant,
}

// Manual impl: cloning the state must not require `F: Clone`
impl<F> Clone for AppState<F> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            start_time: self.start_time,
        }
    }
}

/// Diary HTTP server
pub struct DiaryServer<F = DiaryFetcher> {
    addr: SocketAddr,
    state: AppState<F>,
}

impl<F: PageFetcher + 'static> DiaryServer<F> {
    pub fn new(addr: SocketAddr, service: DiaryService<F>) -> Self {
        Self {
            addr,
            state: AppState {
                service: Arc::new(service),
                start_time: Instant::now(),
            },
        }
    }

    /// Build the router with CORS and request tracing
    pub fn build_router(&self) -> Router {
        create_router(self.state.clone())
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .layer(TraceLayer::new_for_http())
    }

    /// Serve until `shutdown_signal` completes
    pub async fn start_with_shutdown(
        &self,
        shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
    ) -> Result<()> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(self.addr)
            .await
            .map_err(|e| Error::with_source(format!("Failed to bind {}", self.addr), e))?;

        tracing::info!(addr = %self.addr, "Diary server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        tracing::info!("Diary server shutdown complete");
        Ok(())
    }
}
