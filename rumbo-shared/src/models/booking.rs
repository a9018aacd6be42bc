use crate::models::flight::Flight;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A confirmed booking as served by the history endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: Uuid,
    pub flight: Flight,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}
