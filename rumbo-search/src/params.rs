use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Canonical search criteria. The URL query string is the source of truth;
/// in-memory state round-trips through `parse_query`/`to_query` without loss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    /// Absent for one-way searches. `parse_query` defaults it to the day
    /// after departure.
    pub return_date: Option<NaiveDate>,
    pub passengers: u32,
}

/// Query string as it arrives from the address bar. Everything is optional
/// and stringly typed; normalization happens in `parse_query`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuery {
    origin: Option<String>,
    destination: Option<String>,
    departure_date: Option<String>,
    return_date: Option<String>,
    passengers: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireQuery<'a> {
    origin: &'a str,
    destination: &'a str,
    departure_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    return_date: Option<String>,
    passengers: u32,
}

fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value?, "%Y-%m-%d").ok()
}

impl SearchParams {
    /// Defaults for a blank search form on `today`.
    pub fn defaults(today: NaiveDate) -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            departure_date: today,
            return_date: Some(today + Duration::days(1)),
            passengers: 1,
        }
    }

    /// Normalize an address-bar query into full params. Missing or
    /// unparseable fields fall back to defaults: empty route strings,
    /// departure today, return the day after departure, one passenger.
    ///
    /// Dates are compared and carried as plain Y-M-D; no instants, no
    /// timezone drift.
    pub fn parse_query(query: &str, today: NaiveDate) -> Self {
        let raw: RawQuery = serde_urlencoded::from_str(query).unwrap_or_default();

        let departure_date = parse_date(raw.departure_date.as_deref()).unwrap_or(today);
        let return_date = parse_date(raw.return_date.as_deref())
            .unwrap_or(departure_date + Duration::days(1));

        let passengers = raw
            .passengers
            .as_deref()
            .and_then(|p| p.parse::<u32>().ok())
            .filter(|&p| p >= 1)
            .unwrap_or(1);

        Self {
            origin: raw.origin.unwrap_or_default(),
            destination: raw.destination.unwrap_or_default(),
            departure_date,
            return_date: Some(return_date),
            passengers,
        }
    }

    /// Serialize back into the canonical query string.
    pub fn to_query(&self) -> String {
        let wire = WireQuery {
            origin: &self.origin,
            destination: &self.destination,
            departure_date: self.departure_date.format("%Y-%m-%d").to_string(),
            return_date: self
                .return_date
                .map(|d| d.format("%Y-%m-%d").to_string()),
            passengers: self.passengers,
        };
        serde_urlencoded::to_string(&wire).expect("query serialization")
    }

    /// Exchange origin and destination. Both fields move in one step; there
    /// is no intermediate state where they hold the same value.
    pub fn swap_route(&mut self) {
        std::mem::swap(&mut self.origin, &mut self.destination);
    }
}
