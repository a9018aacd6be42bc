use crate::client::ApiClient;
use crate::error::ApiError;
use reqwest::multipart::{Form, Part};
use rumbo_admin::FlightDraft;
use rumbo_shared::Flight;
use uuid::Uuid;

/// Flight create/update travels as a multipart form so the optional image
/// rides along with the fields.
fn flight_form(draft: &FlightDraft) -> Result<Form, ApiError> {
    let date = draft.date.ok_or(ApiError::IncompleteDraft)?;
    let departure_time = draft.departure_time.ok_or(ApiError::IncompleteDraft)?;
    let arrival_time = draft.arrival_time.ok_or(ApiError::IncompleteDraft)?;
    let capacity = draft.capacity.ok_or(ApiError::IncompleteDraft)?;
    let base_price = draft.base_price.ok_or(ApiError::IncompleteDraft)?;

    let mut form = Form::new()
        .text("airline", draft.airline.clone())
        .text("origin", draft.origin.clone())
        .text("destination", draft.destination.clone())
        .text("date", date.format("%Y-%m-%d").to_string())
        .text("departureTime", departure_time.format("%H:%M").to_string())
        .text("arrivalTime", arrival_time.format("%H:%M").to_string())
        .text("capacity", capacity.to_string())
        .text("basePrice", base_price.to_string())
        .text("isFeatured", draft.is_featured.to_string());

    if let Some(image) = &draft.image {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.content_type)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        form = form.part("image", part);
    }

    Ok(form)
}

impl ApiClient {
    /// Upcoming flights, for search and listings.
    pub async fn list_flights(&self) -> Result<Vec<Flight>, ApiError> {
        self.expect_json(self.get("/flights")).await
    }

    /// Every flight including flown ones, for the admin table.
    pub async fn list_all_flights(&self) -> Result<Vec<Flight>, ApiError> {
        self.expect_json(self.get("/flights/all")).await
    }

    /// Flights pinned to the landing page.
    pub async fn featured_flights(&self) -> Result<Vec<Flight>, ApiError> {
        self.expect_json(self.get("/flights/featured")).await
    }

    pub async fn create_flight(&self, draft: &FlightDraft) -> Result<Flight, ApiError> {
        let form = flight_form(draft)?;
        self.expect_json(self.post("/flights").multipart(form)).await
    }

    pub async fn update_flight(&self, id: Uuid, draft: &FlightDraft) -> Result<Flight, ApiError> {
        let form = flight_form(draft)?;
        self.expect_json(self.put(&format!("/flights/{}", id)).multipart(form))
            .await
    }

    pub async fn delete_flight(&self, id: Uuid) -> Result<(), ApiError> {
        self.expect_ok(self.delete(&format!("/flights/{}", id))).await
    }
}
