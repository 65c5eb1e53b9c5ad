//! Infrastructure layer.
//!
//! Provides technical concerns that support the client without containing
//! query logic.
//!
//! # Submodules
//!
//! - [`config`] - Configuration loading, validation and logging setup
//! - [`factory`] - Builds the query client from configuration

pub mod config;
pub mod factory;
