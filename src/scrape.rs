use std::sync::Arc;

use axum::{Router, extract::State, routing::any};
use tower_http::trace::TraceLayer;

use crate::{
    api::envertec::{Credentials, Session},
    error::ScrapeError,
    metrics::MetricsDocument,
    prelude::*,
};

pub struct AppState {
    /// Resolved once at startup, [`None`] when incomplete.
    pub credentials: Option<Credentials>,

    pub base_url: String,
}

pub fn router(metrics_path: &str, state: AppState) -> Router {
    Router::new()
        .route(metrics_path, any(get_metrics))
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
}

#[instrument(skip_all)]
async fn get_metrics(State(state): State<Arc<AppState>>) -> Result<String, ScrapeError> {
    match scrape(state.credentials.as_ref(), &state.base_url).await {
        Ok(document) => {
            let body = document.to_string();
            debug!(%body, "rendered the metrics");
            Ok(body)
        }
        Err(error) => {
            warn!(?error, "failed to scrape the portal: {error}");
            Err(error)
        }
    }
}

/// Log in, resolve the station, and fetch its inverters, within a fresh session.
///
/// Each step only runs when the previous one has succeeded.
pub async fn scrape(
    credentials: Option<&Credentials>,
    base_url: &str,
) -> Result<MetricsDocument, ScrapeError> {
    let credentials = credentials.ok_or(ScrapeError::MissingCredentials)?;
    let session = Session::new(base_url)?;
    session.log_in(credentials).await?;
    let station_id = session.get_station_id().await?;
    let records = session.query_terminal_real(&station_id).await?;
    Ok(MetricsDocument(records))
}
