use crate::app_config::Config;
use rumbo_api::{ApiClient, ApiError};
use rumbo_booking::CheckoutController;
use rumbo_favorites::FavoritesController;
use rumbo_session::{CredentialStore, SessionContext};
use std::sync::Arc;
use std::time::Duration;

/// Everything a mounted page needs, built once at startup and handed down
/// explicitly instead of read from ambient globals.
pub struct AppContext {
    pub config: Config,
    pub session: Arc<SessionContext>,
    pub api: ApiClient,
}

impl AppContext {
    /// Wire the context and restore any persisted session. The credential
    /// store comes from the shell (browser storage, keychain, test double).
    pub fn init(config: Config, store: Arc<dyn CredentialStore>) -> Result<Self, ApiError> {
        let session = Arc::new(SessionContext::new(store));
        session.restore();

        let api = ApiClient::with_timeout(
            &config.api.base_url,
            session.clone(),
            Duration::from_secs(config.api.timeout_seconds),
        )?;

        Ok(Self { config, session, api })
    }

    /// A favorites controller for one mounted component. The cache is
    /// deliberately per-instance; a fresh mount re-hydrates from the
    /// backend.
    pub fn favorites(&self) -> FavoritesController {
        FavoritesController::new(self.session.clone(), Arc::new(self.api.clone()))
    }

    /// A checkout driver for the booking page.
    pub fn checkout_controller(&self) -> CheckoutController {
        CheckoutController::new(self.session.clone(), Arc::new(self.api.clone()))
    }

    /// Explicit teardown: drop the credential and tell everyone.
    pub fn teardown(&self) {
        self.session.logout();
    }
}
