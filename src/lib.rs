//! Path-routed relay that forwards a question to GPT or Gemini and wraps
//! the answer in a uniform JSON envelope.

pub mod api;
pub mod config;
pub mod envelope;
pub mod error;
pub mod logging;
pub mod provider;
pub mod route;

use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use tokio::signal;
use tracing::{info, warn};

pub use api::{dispatch, handle_event, Event};
pub use config::AppConfig;
pub use envelope::Envelope;
pub use error::{Error, Result};
pub use provider::{Adapter, Gemini, Model, OpenAi, Outcome};
pub use route::Route;

/// Read-only per-process state: one adapter per provider.
#[derive(Clone)]
pub struct AppState {
    gpt: Arc<dyn Adapter>,
    gemini: Arc<dyn Adapter>,
}

impl AppState {
    pub fn new(gpt: Arc<dyn Adapter>, gemini: Arc<dyn Adapter>) -> Self {
        Self { gpt, gemini }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Arc::new(OpenAi::new(config.openai.clone())),
            Arc::new(Gemini::new(config.gemini.clone())),
        )
    }

    pub fn adapter(&self, model: Model) -> &dyn Adapter {
        match model {
            Model::Gpt => self.gpt.as_ref(),
            Model::Gemini => self.gemini.as_ref(),
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
