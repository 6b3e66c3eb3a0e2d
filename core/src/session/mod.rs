// core/src/session/mod.rs

pub mod codec;
pub mod data;
pub mod slot;
pub mod store;

pub use codec::{SessionCodec, SessionCookieSettings, SessionSecret, MIN_SECRET_LEN};
pub use data::SessionData;
pub use slot::SessionSlot;
pub use store::{CookieSession, SessionStore};
