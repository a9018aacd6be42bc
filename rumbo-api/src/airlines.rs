use crate::client::ApiClient;
use crate::error::ApiError;
use rumbo_admin::AirlineDraft;
use rumbo_shared::AirlineAccount;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AirlinePayload<'a> {
    name: &'a str,
    tax_id: &'a str,
    email: &'a str,
}

impl<'a> From<&'a AirlineDraft> for AirlinePayload<'a> {
    fn from(draft: &'a AirlineDraft) -> Self {
        Self {
            name: &draft.name,
            tax_id: &draft.tax_id,
            email: &draft.email,
        }
    }
}

impl ApiClient {
    pub async fn list_airlines(&self) -> Result<Vec<AirlineAccount>, ApiError> {
        self.expect_json(self.get("/airlines")).await
    }

    pub async fn create_airline(&self, draft: &AirlineDraft) -> Result<AirlineAccount, ApiError> {
        self.expect_json(self.post("/airlines").json(&AirlinePayload::from(draft)))
            .await
    }

    pub async fn update_airline(
        &self,
        id: Uuid,
        draft: &AirlineDraft,
    ) -> Result<AirlineAccount, ApiError> {
        self.expect_json(
            self.put(&format!("/airlines/{}", id))
                .json(&AirlinePayload::from(draft)),
        )
        .await
    }

    pub async fn delete_airline(&self, id: Uuid) -> Result<(), ApiError> {
        self.expect_ok(self.delete(&format!("/airlines/{}", id))).await
    }
}
