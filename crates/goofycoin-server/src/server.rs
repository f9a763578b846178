use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::api::create_router;
use crate::config::ServerConfig;
use crate::state::AppState;

/// Goofycoin HTTP server.
pub struct GoofycoinServer {
    state: Arc<AppState>,
}

impl GoofycoinServer {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.state.config
    }

    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        create_router(self.state())
    }

    /// Serve until `shutdown` resolves.
    pub async fn serve<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config().bind_addr();
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!("Listening on {}", addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
    }
}
