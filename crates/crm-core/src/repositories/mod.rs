//! # CRM Core - Gateway Ports
//!
//! Trait seams implemented by the REST client crate.

pub mod auth_api;
pub mod menu_api;
pub mod session_store;

pub use auth_api::AuthApi;
pub use menu_api::MenuApi;
pub use session_store::SessionStore;
