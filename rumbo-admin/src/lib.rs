pub mod accounts;
pub mod airlines;
pub mod flights;
pub mod panel;

pub use accounts::AccountDraft;
pub use airlines::AirlineDraft;
pub use flights::{featured_toggle_enabled, is_active, FlightDraft};
pub use panel::{AdminEntity, CrudPanel, DraftError, FormMode};
