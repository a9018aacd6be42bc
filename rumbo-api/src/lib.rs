pub mod airlines;
pub mod auth;
pub mod bookings;
pub mod client;
pub mod error;
pub mod favorites;
pub mod flights;
pub mod reviews;
pub mod users;

pub use client::ApiClient;
pub use error::ApiError;
