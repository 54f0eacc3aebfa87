use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Terminal failure of a scrape.
///
/// The message is what the caller gets as the plain-text response body.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("Missing credentials")]
    MissingCredentials,

    #[error("Login failed")]
    LoginFailed,

    #[error("Login failed: SessionId cookie missing")]
    SessionCookieMissing,

    #[error("StationId not found")]
    StationIdNotFound,

    #[error("Inverter query failed")]
    InverterQueryFailed,

    #[error("Inverter query failed: malformed response")]
    MalformedTelemetry(#[source] serde_json::Error),

    #[error("Envertec portal is unreachable")]
    Unreachable(#[from] reqwest::Error),
}

impl IntoResponse for ScrapeError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
