use crate::client::ApiClient;
use crate::error::ApiError;
use async_trait::async_trait;
use rumbo_favorites::FavoritesApi;
use rumbo_shared::Flight;
use serde::Serialize;
use std::error::Error;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddFavoriteRequest {
    flight_id: Uuid,
}

impl ApiClient {
    /// The signed-in user's favorite flights, full records for the
    /// favorites page.
    pub async fn list_favorites(&self) -> Result<Vec<Flight>, ApiError> {
        self.expect_json(self.get("/favorites")).await
    }

    pub async fn add_favorite(&self, flight_id: Uuid) -> Result<(), ApiError> {
        self.expect_ok(self.post("/favorites").json(&AddFavoriteRequest { flight_id }))
            .await
    }

    pub async fn remove_favorite(&self, flight_id: Uuid) -> Result<(), ApiError> {
        self.expect_ok(self.delete(&format!("/favorites/{}", flight_id)))
            .await
    }
}

#[async_trait]
impl FavoritesApi for ApiClient {
    async fn list(&self) -> Result<Vec<Uuid>, Box<dyn Error + Send + Sync>> {
        let flights = self.list_favorites().await?;
        Ok(flights.into_iter().map(|f| f.id).collect())
    }

    async fn add(&self, flight_id: Uuid) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(self.add_favorite(flight_id).await?)
    }

    async fn remove(&self, flight_id: Uuid) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(self.remove_favorite(flight_id).await?)
    }
}
