use chrono::NaiveDate;
use rumbo_shared::pii::Masked;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One passenger slot on the checkout form. The backend speaks Spanish on
/// the wire; the renames keep its contract intact.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PassengerRecord {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "nacionalidad")]
    pub nationality: String,
    #[serde(rename = "dni")]
    pub document_number: Masked<String>,
    #[serde(rename = "fechaNacimiento")]
    pub birth_date: Option<NaiveDate>,
    pub email: String,
}

/// The payload submitted to the bookings endpoint. Built only after every
/// passenger record validated; submitted once, never retried automatically.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub flight_id: Uuid,
    pub passengers: Vec<PassengerRecord>,
    pub total_price: f64,
}
