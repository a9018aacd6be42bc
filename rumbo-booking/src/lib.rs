pub mod checkout;
pub mod controller;
pub mod models;
pub mod validate;

pub use checkout::{Checkout, CheckoutError, CheckoutPhase, FailureReason, PriceBreakdown, TAX_RATE};
pub use controller::{BookingSubmitError, BookingsApi, CheckoutController};
pub use models::{BookingDraft, PassengerRecord};
pub use validate::{validate_passenger, FieldError, PassengerField};
