//! # CRM Client
//!
//! REST gateway for the CRM console: the authorized HTTP client with its
//! token-refresh middleware, session stores, wire DTOs, and one typed API
//! per backend resource.

pub mod dto;
pub mod http;
pub mod rest;
pub mod session;

pub use http::ApiClient;
pub use session::{FileSessionStore, MemorySessionStore};
