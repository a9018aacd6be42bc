use crate::set::{FavoriteSet, SyncCommand};
use async_trait::async_trait;
use rumbo_session::SessionContext;
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

/// Backend surface the favorites feature consumes.
#[async_trait]
pub trait FavoritesApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Uuid>, Box<dyn Error + Send + Sync>>;
    async fn add(&self, flight_id: Uuid) -> Result<(), Box<dyn Error + Send + Sync>>;
    async fn remove(&self, flight_id: Uuid) -> Result<(), Box<dyn Error + Send + Sync>>;
}

#[derive(Debug, thiserror::Error)]
pub enum FavoriteError {
    #[error("Must log in to save favorites")]
    LoginRequired,

    #[error("Favorite sync failed: {0}")]
    SyncFailed(String),

    #[error("Could not load favorites: {0}")]
    HydrateFailed(String),
}

/// Drives a `FavoriteSet` against the backend for the signed-in user.
///
/// Anonymous sessions fail fast: no request is issued and membership stays
/// empty until someone logs in.
pub struct FavoritesController {
    session: Arc<SessionContext>,
    api: Arc<dyn FavoritesApi>,
    set: FavoriteSet,
}

impl FavoritesController {
    pub fn new(session: Arc<SessionContext>, api: Arc<dyn FavoritesApi>) -> Self {
        Self {
            session,
            api,
            set: FavoriteSet::new(),
        }
    }

    /// Load the user's favorites once per mount. Anonymous users get an
    /// empty, hydrated set without touching the network.
    pub async fn hydrate(&mut self) -> Result<(), FavoriteError> {
        if !self.session.is_authenticated() {
            self.set.hydrate(Vec::new());
            return Ok(());
        }

        let ids = self
            .api
            .list()
            .await
            .map_err(|e| FavoriteError::HydrateFailed(e.to_string()))?;
        self.set.hydrate(ids);
        Ok(())
    }

    pub fn is_favorite(&self, flight_id: Uuid) -> bool {
        self.set.is_favorite(flight_id)
    }

    /// Called when the session logs out: favorites belong to nobody now.
    pub fn reset(&mut self) {
        self.set = FavoriteSet::new();
    }

    /// Toggle a flight and drain the resulting sync requests. Returns the
    /// settled membership state for the flight.
    pub async fn toggle(&mut self, flight_id: Uuid) -> Result<bool, FavoriteError> {
        if !self.session.is_authenticated() {
            return Err(FavoriteError::LoginRequired);
        }

        let mut next = self.set.toggle(flight_id);
        while let Some(command) = next {
            let result = match command {
                SyncCommand::Add(id) => self.api.add(id).await,
                SyncCommand::Remove(id) => self.api.remove(id).await,
            };

            match result {
                Ok(()) => {
                    next = self.set.complete(flight_id, true);
                }
                Err(e) => {
                    self.set.complete(flight_id, false);
                    return Err(FavoriteError::SyncFailed(e.to_string()));
                }
            }
        }

        Ok(self.set.is_favorite(flight_id))
    }
}
