use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A flight as served by the backend. Owned by the server; the client
/// treats it as immutable within a render cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: Uuid,
    pub airline: String,
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub departure_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub arrival_time: NaiveTime,
    pub capacity: u32,
    pub base_price: f64,
    pub is_featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Flight {
    /// Minutes in the air, wrapping past midnight when the arrival time
    /// is earlier than the departure time.
    pub fn duration_minutes(&self) -> i64 {
        let delta = (self.arrival_time - self.departure_time).num_minutes();
        if delta < 0 {
            delta + 24 * 60
        } else {
            delta
        }
    }
}

/// View model for flight listings. Computed per render, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayFlight {
    pub flight: Flight,
    pub total_price: f64,
    pub duration: String,
}

impl DisplayFlight {
    /// The one place price and duration formatting happens; every list
    /// view goes through here so all pages render identically.
    pub fn present(flight: &Flight, passengers: u32) -> Self {
        let minutes = flight.duration_minutes();
        Self {
            flight: flight.clone(),
            total_price: flight.base_price * f64::from(passengers),
            duration: format!("{}h {:02}m", minutes / 60, minutes % 60),
        }
    }
}

/// The backend serializes times of day as "HH:MM".
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}
