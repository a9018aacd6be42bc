pub mod models;
pub mod pii;

pub use models::account::{AirlineAccount, Role, UserAccount};
pub use models::booking::BookingRecord;
pub use models::flight::{DisplayFlight, Flight};
pub use models::review::ReviewSummary;
pub use models::upload::ImageUpload;
