//! Core library components.
//!
//! The platform client, the sealed-box engine, configuration and the
//! resource types exchanged with the platform.

pub mod api;
pub mod config;
pub mod constants;
pub mod domain;
pub mod seal;
pub mod types;
pub mod validation;
