// demos/web_app/src/web/mod.rs

// Declare child modules
pub mod handlers;
pub mod routes;
pub mod session;

pub use routes::configure_app_routes;
