use axum::Router;
use axum::routing::any;
use std::net::TcpListener;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::configuration::{Settings, UpstreamSettings};
use crate::routes::cors::cors_headers;
use crate::routes::{complete, health_check};

#[derive(Clone, Debug)]
pub struct AppState {
    pub upstream: Arc<UpstreamSettings>,
}

#[derive(Debug)]
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, std::io::Error> {
        let address = configuration.application.address();
        let listener = TcpListener::bind(&address)?;
        listener.set_nonblocking(true)?;
        let port = listener.local_addr()?.port();
        tracing::info!("Listening on http://{}", listener.local_addr()?);

        let state = AppState {
            upstream: Arc::new(configuration.upstream),
        };

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        let listener = tokio::net::TcpListener::from_std(self.listener)?;
        axum::serve(listener, router(self.state)).await
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", any(health_check))
        .route("/v1/complete", any(complete))
        // Route layer: unmatched paths keep the bare default 404
        .route_layer(cors_headers())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
