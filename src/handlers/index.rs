use axum::{
    extract::State,
    response::Html,
};
use log::debug;
use crate::error::PageError;
use crate::render::IndexPage;
use crate::server::AppState;

pub async fn index_handler(
    State(state): State<AppState>,
) -> Result<Html<String>, PageError> {
    debug!("Rendering dashboard page");

    let chart = state.chart().await?;
    if chart.is_empty() {
        debug!("No chart data available, embedding empty chart");
    }

    let page = IndexPage {
        title: state.title(),
        chart: &chart,
    };
    Ok(Html(page.render()))
}
