// demos/web_app/src/web/handlers/mod.rs

pub mod auth_handlers;
