pub mod app_config;
pub mod context;
pub mod routes;

pub use app_config::Config;
pub use context::AppContext;
pub use routes::Route;
