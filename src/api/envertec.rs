mod models;
mod station;

use std::{
    fmt::{Debug, Formatter},
    sync::Arc,
};

use reqwest::{
    Client,
    Response,
    StatusCode,
    cookie::{CookieStore, Jar},
};

pub use self::{models::InverterRecord, station::StationId};
use self::models::{LoginRequest, QueryTerminalRealRequest, QueryTerminalRealResponse};
use crate::{error::ScrapeError, prelude::*};

pub const BASE_URL: &str = "https://www.envertecportal.com";

/// Cookie which the portal sets upon a successful login.
const SESSION_COOKIE: &str = "ASP.NET_SessionId";

/// Envertec Portal account.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Both the username and password must be present and non-empty.
    pub fn new(username: Option<String>, password: Option<String>) -> Result<Self, ScrapeError> {
        match (username, password) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Ok(Self { username, password })
            }
            _ => Err(ScrapeError::MissingCredentials),
        }
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Cookie-bearing portal session.
///
/// Lives for a single scrape: log in, resolve the station, query the inverters, drop.
pub struct Session {
    client: Client,
    jar: Arc<Jar>,
    base_url: String,
}

impl Session {
    pub fn new(base_url: &str) -> Result<Self, ScrapeError> {
        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .user_agent(concat!("envertec-exporter/", env!("CARGO_PKG_VERSION")))
            .cookie_provider(Arc::clone(&jar))
            .build()?;
        Ok(Self { client, jar, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    #[instrument(skip_all, fields(username = %credentials.username))]
    pub async fn log_in(&self, credentials: &Credentials) -> Result<(), ScrapeError> {
        info!("logging in…");
        let response = self
            .client
            .post(self.url("apiaccount/login"))
            .json(&LoginRequest { username: &credentials.username, password: &credentials.password })
            .send()
            .await?;
        let status = response.status();
        if status != StatusCode::OK {
            warn!(%status, "the portal has rejected the login");
            return Err(ScrapeError::LoginFailed);
        }
        if !self.has_session_cookie(&response) {
            return Err(ScrapeError::SessionCookieMissing);
        }
        info!("logged in");
        Ok(())
    }

    /// Scrape the station ID from the system overview page.
    #[instrument(skip_all)]
    pub async fn get_station_id(&self) -> Result<StationId, ScrapeError> {
        let page = self.client.post(self.url("terminal/systemoverview")).send().await?.text().await?;
        let station_id = StationId::find_in(&page).ok_or(ScrapeError::StationIdNotFound)?;
        info!(%station_id, "found the station");
        Ok(station_id)
    }

    /// Fetch the real-time data of the station's inverters (first page only).
    #[instrument(skip_all, fields(station_id = %station_id))]
    pub async fn query_terminal_real(
        &self,
        station_id: &StationId,
    ) -> Result<Vec<InverterRecord>, ScrapeError> {
        let request = QueryTerminalRealRequest {
            page: 1,
            per_page: 20,
            order_by: "GATEWAYSN",
            where_condition: station_id.where_condition(),
        };
        let response =
            self.client.post(self.url("ApiInverters/QueryTerminalReal")).json(&request).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            warn!(%status, "the portal has rejected the inverter query");
            return Err(ScrapeError::InverterQueryFailed);
        }
        let body = response.text().await?;
        debug!(%body, "received the inverter data");
        let records: Vec<InverterRecord> = serde_json::from_str::<QueryTerminalRealResponse>(&body)
            .map_err(ScrapeError::MalformedTelemetry)?
            .into();
        info!(n_inverters = records.len(), "fetched the inverters");
        Ok(records)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// Look at the cookies set by the login response, and then at the whole jar for its URL.
    fn has_session_cookie(&self, response: &Response) -> bool {
        if response.cookies().any(|cookie| cookie.name() == SESSION_COOKIE) {
            return true;
        }
        self.jar.cookies(response.url()).is_some_and(|header| {
            header.to_str().is_ok_and(|cookies| {
                cookies
                    .split(';')
                    .filter_map(|cookie| cookie.trim().split_once('='))
                    .any(|(name, _)| name == SESSION_COOKIE)
            })
        })
    }
}
