//! Backend communication.
//!
//! # Services
//!
//! - [`api`] - CSV upload and job status calls against the processing backend

pub mod api;

pub use api::*;
