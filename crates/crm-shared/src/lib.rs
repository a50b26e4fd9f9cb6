//! # CRM Shared
//!
//! Shared types, constants, configuration, and telemetry for the CRM console.

pub mod config;
pub mod constants;
pub mod error;
pub mod telemetry;
pub mod types;

pub use error::AppError;
pub use types::YnFlag;
