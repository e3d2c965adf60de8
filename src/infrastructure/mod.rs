//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`cache`] - Resolution cache backends (PostgreSQL, Redis, memory)
//! - [`settings`] - Settings storage backends
//! - [`probe`] - HTTP existence probe
//! - [`store`] - Backend selection and connection setup

pub mod cache;
pub mod probe;
pub mod settings;
pub mod store;
