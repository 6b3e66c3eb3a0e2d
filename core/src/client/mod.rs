// core/src/client/mod.rs

pub mod api_client;
pub mod params;

pub use api_client::{ApiClient, BodyOptions, QueryOptions};
pub use params::{build_params_from_object, Params};
