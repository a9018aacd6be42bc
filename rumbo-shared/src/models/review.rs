use serde::{Deserialize, Serialize};

/// Aggregate rating for an airline, served by the reviews endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub airline: String,
    pub average: f64,
    pub count: u32,
}
