//! # CRM Core
//!
//! Domain entities, services, and gateway ports for the CRM console client.

pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

pub use domain::*;
pub use error::DomainError;
