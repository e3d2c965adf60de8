//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the persistent key-value store the service depends
//! on. Concrete backends live in `crate::infrastructure`; mock
//! implementations are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`ResolutionCache`] - Source URL → resolved URL decisions
//! - [`SettingsRepository`] - Operator settings such as the production URL

pub mod error;
pub mod resolution_cache;
pub mod settings_repository;

pub use error::{StoreError, StoreResult};
pub use resolution_cache::ResolutionCache;
pub use settings_repository::{PRODUCTION_URL_KEY, SettingsRepository};

#[cfg(test)]
pub use resolution_cache::MockResolutionCache;
#[cfg(test)]
pub use settings_repository::MockSettingsRepository;
