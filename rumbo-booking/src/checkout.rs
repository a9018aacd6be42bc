use crate::models::{BookingDraft, PassengerRecord};
use crate::validate::{validate_passenger, FieldError};
use chrono::NaiveDate;
use rumbo_shared::Flight;

/// Flat tax applied on top of the fare subtotal.
pub const TAX_RATE: f64 = 0.20;

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutPhase {
    Drafting,
    Validating,
    Submitting,
    Confirmed,
    Failed(FailureReason),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FailureReason {
    /// No credential was present at submit time; no network call was made.
    MustAuthenticate,
    /// The backend rejected the credential mid-flow; prompt a re-login.
    SessionExpired,
    /// Anything else the backend said. Retry is manual, from Drafting.
    Submission(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBreakdown {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CheckoutError {
    #[error("Checkout cannot {action} while {phase}")]
    InvalidTransition {
        action: &'static str,
        phase: &'static str,
    },

    #[error("{0} passenger record(s) need corrections")]
    ValidationFailed(usize),

    #[error("Must authenticate before booking")]
    MustAuthenticate,

    #[error("Booking submission failed: {0}")]
    SubmissionFailed(String),
}

/// The checkout screen's state machine:
/// `Drafting → Validating → Submitting → Confirmed | Failed`.
///
/// The passenger array is sized once from the passenger count the search
/// was made with and never grows or shrinks; only field values change.
#[derive(Debug)]
pub struct Checkout {
    flight: Flight,
    passengers: Vec<PassengerRecord>,
    errors: Vec<Vec<FieldError>>,
    phase: CheckoutPhase,
}

impl Checkout {
    pub fn new(flight: Flight, passenger_count: u32) -> Self {
        let count = passenger_count.max(1) as usize;
        Self {
            flight,
            passengers: vec![PassengerRecord::default(); count],
            errors: vec![Vec::new(); count],
            phase: CheckoutPhase::Drafting,
        }
    }

    pub fn flight(&self) -> &Flight {
        &self.flight
    }

    pub fn phase(&self) -> &CheckoutPhase {
        &self.phase
    }

    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    pub fn passengers(&self) -> &[PassengerRecord] {
        &self.passengers
    }

    /// Per-passenger validation errors from the last submit attempt,
    /// indexed like the passenger array.
    pub fn errors(&self) -> &[Vec<FieldError>] {
        &self.errors
    }

    /// Edit a passenger slot. Only possible while drafting.
    pub fn passenger_mut(&mut self, index: usize) -> Option<&mut PassengerRecord> {
        if self.phase != CheckoutPhase::Drafting {
            return None;
        }
        self.passengers.get_mut(index)
    }

    /// Fare arithmetic is plain floating point, same as every list view.
    pub fn pricing(&self) -> PriceBreakdown {
        let subtotal = self.flight.base_price * self.passengers.len() as f64;
        let tax = subtotal * TAX_RATE;
        PriceBreakdown {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }

    /// Run `Drafting → Validating`, and on a clean form `→ Submitting`,
    /// yielding the draft to send. Validation failures return the machine
    /// to Drafting with every error collected; a missing credential goes
    /// straight to Failed without touching the network.
    pub fn begin_submit(
        &mut self,
        today: NaiveDate,
        authenticated: bool,
    ) -> Result<BookingDraft, CheckoutError> {
        if self.phase != CheckoutPhase::Drafting {
            return Err(self.invalid("submit"));
        }

        self.phase = CheckoutPhase::Validating;
        self.errors = self
            .passengers
            .iter()
            .map(|record| validate_passenger(record, today))
            .collect();

        let failing = self.errors.iter().filter(|e| !e.is_empty()).count();
        if failing > 0 {
            self.phase = CheckoutPhase::Drafting;
            return Err(CheckoutError::ValidationFailed(failing));
        }

        if !authenticated {
            self.phase = CheckoutPhase::Failed(FailureReason::MustAuthenticate);
            return Err(CheckoutError::MustAuthenticate);
        }

        self.phase = CheckoutPhase::Submitting;
        Ok(BookingDraft {
            flight_id: self.flight.id,
            passengers: self.passengers.clone(),
            total_price: self.pricing().total,
        })
    }

    /// Settle the submission.
    pub fn confirm(&mut self) -> Result<(), CheckoutError> {
        if self.phase != CheckoutPhase::Submitting {
            return Err(self.invalid("confirm"));
        }
        self.phase = CheckoutPhase::Confirmed;
        Ok(())
    }

    pub fn fail(&mut self, reason: FailureReason) -> Result<(), CheckoutError> {
        if self.phase != CheckoutPhase::Submitting {
            return Err(self.invalid("fail"));
        }
        tracing::warn!(?reason, "Booking submission failed");
        self.phase = CheckoutPhase::Failed(reason);
        Ok(())
    }

    /// Back to the form after a failure, fields intact. Resubmission is
    /// always user-initiated.
    pub fn retry(&mut self) -> Result<(), CheckoutError> {
        match self.phase {
            CheckoutPhase::Failed(_) => {
                self.phase = CheckoutPhase::Drafting;
                Ok(())
            }
            _ => Err(self.invalid("retry")),
        }
    }

    fn invalid(&self, action: &'static str) -> CheckoutError {
        let phase = match self.phase {
            CheckoutPhase::Drafting => "drafting",
            CheckoutPhase::Validating => "validating",
            CheckoutPhase::Submitting => "submitting",
            CheckoutPhase::Confirmed => "confirmed",
            CheckoutPhase::Failed(_) => "failed",
        };
        CheckoutError::InvalidTransition { action, phase }
    }
}
