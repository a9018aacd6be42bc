pub mod controller;
pub mod set;

pub use controller::{FavoriteError, FavoritesApi, FavoritesController};
pub use set::{FavoriteSet, SyncCommand};
