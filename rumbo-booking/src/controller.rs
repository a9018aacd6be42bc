use crate::checkout::{Checkout, CheckoutError, FailureReason};
use crate::models::BookingDraft;
use async_trait::async_trait;
use chrono::NaiveDate;
use rumbo_session::SessionContext;
use std::sync::Arc;

/// Submission outcome the bookings endpoint can report. Expired sessions
/// are their own case so the UI can prompt a re-login instead of a retry.
#[derive(Debug, thiserror::Error)]
pub enum BookingSubmitError {
    #[error("Session expired")]
    SessionExpired,

    #[error("{0}")]
    Other(String),
}

/// Backend surface the checkout consumes.
#[async_trait]
pub trait BookingsApi: Send + Sync {
    async fn create_booking(&self, draft: &BookingDraft) -> Result<(), BookingSubmitError>;
}

/// Drives a `Checkout` through validation and one submission attempt.
pub struct CheckoutController {
    session: Arc<SessionContext>,
    api: Arc<dyn BookingsApi>,
}

impl CheckoutController {
    pub fn new(session: Arc<SessionContext>, api: Arc<dyn BookingsApi>) -> Self {
        Self { session, api }
    }

    /// Validate and submit. On success the checkout lands in Confirmed and
    /// the caller navigates to the booking-history view; on failure the
    /// checkout records why and waits for the user.
    pub async fn submit(
        &self,
        checkout: &mut Checkout,
        today: NaiveDate,
    ) -> Result<(), CheckoutError> {
        let draft = checkout.begin_submit(today, self.session.is_authenticated())?;

        match self.api.create_booking(&draft).await {
            Ok(()) => {
                tracing::info!(flight_id = %draft.flight_id, "Booking confirmed");
                checkout.confirm()
            }
            Err(BookingSubmitError::SessionExpired) => {
                checkout.fail(FailureReason::SessionExpired)?;
                Err(CheckoutError::MustAuthenticate)
            }
            Err(BookingSubmitError::Other(message)) => {
                checkout.fail(FailureReason::Submission(message.clone()))?;
                Err(CheckoutError::SubmissionFailed(message))
            }
        }
    }
}
