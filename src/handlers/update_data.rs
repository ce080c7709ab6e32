use axum::{
    extract::State,
    response::Json,
};
use log::debug;
use serde::{Deserialize, Serialize};
use crate::error::ApiError;
use crate::server::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// Serialized chart as JSON text; the client runs `JSON.parse` on it.
    pub graphs_json: String,
}

pub async fn update_data_handler(
    State(state): State<AppState>,
) -> Result<Json<RefreshResponse>, ApiError> {
    debug!("Processing update_data request");

    let chart = state.chart().await?;
    Ok(Json(RefreshResponse {
        graphs_json: chart.into_string(),
    }))
}
