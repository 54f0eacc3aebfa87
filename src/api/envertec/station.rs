use std::sync::LazyLock;

use regex::Regex;

/// Matches `var stationId = '…';` in the system overview page.
static STATION_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"var\s+stationId\s+=\s+'(?P<station_id>\w+)';")
        .expect("the station ID pattern must compile")
});

/// Portal-assigned station identifier, opaque to us.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub struct StationId(String);

impl StationId {
    /// Look for the station ID assignment anywhere in the page, which is treated as plain text.
    pub fn find_in(page: &str) -> Option<Self> {
        STATION_ID_PATTERN
            .captures(page)
            .and_then(|captures| captures.name("station_id"))
            .map(|station_id| Self(station_id.as_str().to_owned()))
    }

    /// Filter condition for the inverter query, with the ID interpolated verbatim.
    pub fn where_condition(&self) -> String {
        format!(r#"{{"STATIONID":"{}"}}"#, self.0)
    }
}
