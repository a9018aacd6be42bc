use crate::client::ApiClient;
use crate::error::ApiError;
use rumbo_shared::ReviewSummary;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct ReviewDraft {
    pub airline: String,
    pub rating: u8,
    pub comment: String,
}

impl ApiClient {
    /// Average rating shown next to each airline in the results list.
    pub async fn airline_average(&self, airline: &str) -> Result<ReviewSummary, ApiError> {
        let path = format!("/reviews/airline/{}/average", urlencoding::encode(airline));
        self.expect_json(self.get(&path)).await
    }

    pub async fn submit_review(&self, draft: &ReviewDraft) -> Result<(), ApiError> {
        self.expect_ok(self.post("/reviews").json(draft)).await
    }

    pub async fn delete_review(&self, id: Uuid) -> Result<(), ApiError> {
        self.expect_ok(self.delete(&format!("/reviews/{}", id))).await
    }
}
