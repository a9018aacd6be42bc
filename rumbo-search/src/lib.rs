pub mod matcher;
pub mod params;
pub mod state;

pub use matcher::{match_flights, PriceOrder};
pub use params::SearchParams;
pub use state::{SearchState, SearchSubmit};
