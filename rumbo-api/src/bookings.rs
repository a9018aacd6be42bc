use crate::client::ApiClient;
use crate::error::ApiError;
use async_trait::async_trait;
use rumbo_booking::{BookingDraft, BookingSubmitError, BookingsApi};
use rumbo_shared::BookingRecord;

impl ApiClient {
    /// The signed-in user's booking history.
    pub async fn my_bookings(&self) -> Result<Vec<BookingRecord>, ApiError> {
        self.expect_json(self.get("/bookings/my-bookings")).await
    }

    pub async fn create_booking(&self, draft: &BookingDraft) -> Result<BookingRecord, ApiError> {
        self.expect_json(self.post("/bookings").json(draft)).await
    }
}

#[async_trait]
impl BookingsApi for ApiClient {
    async fn create_booking(&self, draft: &BookingDraft) -> Result<(), BookingSubmitError> {
        match ApiClient::create_booking(self, draft).await {
            Ok(_) => Ok(()),
            Err(ApiError::SessionExpired) => Err(BookingSubmitError::SessionExpired),
            Err(e) => Err(BookingSubmitError::Other(e.to_string())),
        }
    }
}
