use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::chart::{ChartSerializer, SerializedChart};
use crate::error::AppError;
use crate::handlers;
use crate::provider::MetricProvider;

/// Per-request view of the injected collaborators. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    provider: Arc<dyn MetricProvider>,
    serializer: Arc<ChartSerializer>,
}

impl AppState {
    pub fn title(&self) -> &str {
        self.serializer.title()
    }

    /// Runs provider then serializer on the blocking pool.
    pub async fn chart(&self) -> Result<SerializedChart, AppError> {
        let provider = Arc::clone(&self.provider);
        let serializer = Arc::clone(&self.serializer);
        let chart = tokio::task::spawn_blocking(move || {
            let table = provider.snapshot();
            serializer.serialize(&table)
        })
        .await?;
        Ok(chart)
    }
}

pub struct DashboardServer {
    state: AppState,
}

impl DashboardServer {
    pub fn new(provider: Arc<dyn MetricProvider>, serializer: ChartSerializer) -> Self {
        DashboardServer {
            state: AppState {
                provider,
                serializer: Arc::new(serializer),
            },
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(handlers::index_handler))
            .route("/update_data", post(handlers::update_data_handler))
            .layer(from_fn(crate::middleware::logging))
            .with_state(self.state.clone())
    }

    pub async fn serve(self, addr: SocketAddr) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("📊 KPI dashboard listening on http://{}", listener.local_addr()?);
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}
